//! Expression, pattern and parameter emission.

use algotrace_parser::{
    Arrow, ArrowBody, BindingElement, Expr, Param, Pattern, Property, PropertyKey, Template,
    UnaryOp, UpdateOp,
};

use super::Printer;

impl Printer {
    pub fn emit_expression(&mut self, expr: &Expr) {
        match expr {
            Expr::Identifier(name) => self.write(name),
            Expr::This => self.write("this"),
            Expr::Null => self.write("null"),
            Expr::Bool(value) => self.write(if *value { "true" } else { "false" }),
            Expr::Number(raw) | Expr::String(raw) => self.write(raw),
            Expr::Template(template) => self.emit_template(template),
            Expr::Array(elements) => {
                self.write("[");
                self.emit_elements_with_holes(elements, false, Self::emit_expression);
                self.write("]");
            }
            Expr::Object(properties) => self.emit_object_literal(properties),
            Expr::Function(function) => self.emit_function(function),
            Expr::Arrow(arrow) => self.emit_arrow(arrow),
            Expr::Unary { op, arg } => {
                self.write(op.as_str());
                if needs_space_after_unary(*op, arg) {
                    self.write_space();
                }
                self.emit_expression(arg);
            }
            Expr::Update { op, prefix, arg } => {
                if *prefix {
                    self.write(op.as_str());
                    self.emit_expression(arg);
                } else {
                    self.emit_expression(arg);
                    self.write(op.as_str());
                }
            }
            Expr::Binary { op, left, right } => {
                self.emit_expression(left);
                self.write_space();
                self.write(op.as_str());
                self.write_space();
                self.emit_expression(right);
            }
            Expr::Assign { op, target, value } => {
                self.emit_expression(target);
                self.write_space();
                self.write(op.as_str());
                self.write_space();
                self.emit_expression(value);
            }
            Expr::Conditional {
                test,
                consequent,
                alternate,
            } => {
                self.emit_expression(test);
                self.write(" ? ");
                self.emit_expression(consequent);
                self.write(" : ");
                self.emit_expression(alternate);
            }
            Expr::Call {
                callee,
                args,
                optional,
            } => {
                self.emit_expression(callee);
                if *optional {
                    self.write("?.");
                }
                self.emit_arguments(args);
            }
            Expr::New { callee, args } => {
                self.write("new ");
                self.emit_expression(callee);
                if let Some(args) = args {
                    self.emit_arguments(args);
                }
            }
            Expr::Member {
                object,
                property,
                optional,
            } => {
                self.emit_expression(object);
                if *optional {
                    self.write("?.");
                } else {
                    // `1.x` would lex as a malformed number.
                    if matches!(object.as_ref(), Expr::Number(raw) if is_plain_integer(raw)) {
                        self.write_space();
                    }
                    self.write(".");
                }
                self.write(property);
            }
            Expr::Index {
                object,
                index,
                optional,
            } => {
                self.emit_expression(object);
                self.write(if *optional { "?.[" } else { "[" });
                self.emit_expression(index);
                self.write("]");
            }
            Expr::Sequence(exprs) => self.emit_comma_separated(exprs, Self::emit_expression),
            Expr::Paren(inner) => {
                self.write("(");
                self.emit_expression(inner);
                self.write(")");
            }
            Expr::Spread(arg) => {
                self.write("...");
                self.emit_expression(arg);
            }
        }
    }

    fn emit_template(&mut self, template: &Template) {
        self.write("`");
        for (i, quasi) in template.quasis.iter().enumerate() {
            self.write(quasi);
            if let Some(expr) = template.exprs.get(i) {
                self.write("${");
                self.emit_expression(expr);
                self.write("}");
            }
        }
        self.write("`");
    }

    /// `{ a, b: 1, ...rest }`, or `{}` when empty.
    fn emit_object_literal(&mut self, properties: &[Property]) {
        if properties.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{ ");
        self.emit_comma_separated(properties, |p, property| match property {
            Property::KeyValue { key, value } => {
                p.emit_property_key(key);
                p.write(": ");
                p.emit_expression(value);
            }
            Property::Shorthand(name) => p.write(name),
            Property::Spread(expr) => {
                p.write("...");
                p.emit_expression(expr);
            }
        });
        self.write(" }");
    }

    fn emit_arrow(&mut self, arrow: &Arrow) {
        match arrow.params.as_slice() {
            [
                Param {
                    binding:
                        BindingElement {
                            target: Pattern::Identifier(name),
                            default: None,
                        },
                    rest: false,
                },
            ] if arrow.bare_param => self.write(name),
            params => self.emit_parameters(params),
        }
        self.write(" => ");
        match &arrow.body {
            ArrowBody::Block(block) => self.emit_block(block),
            ArrowBody::Expr(expr) => self.emit_expression(expr),
        }
    }

    fn emit_arguments(&mut self, args: &[Expr]) {
        self.write("(");
        self.emit_comma_separated(args, Self::emit_expression);
        self.write(")");
    }

    pub(super) fn emit_parameters(&mut self, params: &[Param]) {
        self.write("(");
        self.emit_comma_separated(params, |p, param| {
            if param.rest {
                p.write("...");
            }
            p.emit_binding_element(&param.binding);
        });
        self.write(")");
    }

    fn emit_binding_element(&mut self, element: &BindingElement) {
        self.emit_pattern(&element.target);
        if let Some(default) = &element.default {
            self.write(" = ");
            self.emit_expression(default);
        }
    }

    pub fn emit_pattern(&mut self, pattern: &Pattern) {
        match pattern {
            Pattern::Identifier(name) => self.write(name),
            Pattern::Array(array) => {
                self.write("[");
                let has_rest = array.rest.is_some();
                self.emit_elements_with_holes(&array.elements, has_rest, Self::emit_binding_element);
                if let Some(rest) = &array.rest {
                    if !array.elements.is_empty() {
                        self.write(", ");
                    }
                    self.write("...");
                    self.emit_pattern(rest);
                }
                self.write("]");
            }
            Pattern::Object(object) => {
                if object.properties.is_empty() && object.rest.is_none() {
                    self.write("{}");
                    return;
                }
                self.write("{ ");
                self.emit_comma_separated(&object.properties, |p, property| {
                    if property.shorthand {
                        p.emit_binding_element(&property.value);
                    } else {
                        p.emit_property_key(&property.key);
                        p.write(": ");
                        p.emit_binding_element(&property.value);
                    }
                });
                if let Some(rest) = &object.rest {
                    if !object.properties.is_empty() {
                        self.write(", ");
                    }
                    self.write("...");
                    self.write(rest);
                }
                self.write(" }");
            }
        }
    }

    fn emit_property_key(&mut self, key: &PropertyKey) {
        match key {
            PropertyKey::Identifier(text) | PropertyKey::String(text) | PropertyKey::Number(text) => {
                self.write(text);
            }
            PropertyKey::Computed(expr) => {
                self.write("[");
                self.emit_expression(expr);
                self.write("]");
            }
        }
    }
}

/// Keyword operators need a separator, and `-`/`+` must not merge with a
/// following operator of the same sign (`- -x`, `+ ++x`).
fn needs_space_after_unary(op: UnaryOp, arg: &Expr) -> bool {
    if op.is_keyword() {
        return true;
    }
    match (op, arg) {
        (UnaryOp::Minus, Expr::Unary { op: UnaryOp::Minus, .. })
        | (UnaryOp::Plus, Expr::Unary { op: UnaryOp::Plus, .. }) => true,
        (
            UnaryOp::Minus,
            Expr::Update {
                op: UpdateOp::Decrement,
                prefix: true,
                ..
            },
        )
        | (
            UnaryOp::Plus,
            Expr::Update {
                op: UpdateOp::Increment,
                prefix: true,
                ..
            },
        ) => true,
        _ => false,
    }
}

/// Decimal integer literal with no `.`, exponent, radix prefix or suffix.
fn is_plain_integer(raw: &str) -> bool {
    raw.bytes().all(|b| b.is_ascii_digit() || b == b'_')
}
