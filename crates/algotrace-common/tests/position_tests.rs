use super::*;

#[test]
fn test_line_map_single_line() {
    let map = LineMap::build("let x = 1;");
    assert_eq!(map.line_count(), 1);
    assert_eq!(map.offset_to_position(4), Position::new(0, 4));
}

#[test]
fn test_line_map_multiple_lines() {
    let text = "function f() {\n    return 1;\n}\n";
    let map = LineMap::build(text);
    assert_eq!(map.line_count(), 4);

    let ret = text.find("return").unwrap() as u32;
    assert_eq!(map.offset_to_position(ret), Position::new(1, 4));

    let brace = text.rfind('}').unwrap() as u32;
    assert_eq!(map.offset_to_position(brace), Position::new(2, 0));
}

#[test]
fn test_line_map_offset_at_newline_belongs_to_previous_line() {
    let map = LineMap::build("a\nb");
    assert_eq!(map.offset_to_position(1), Position::new(0, 1));
    assert_eq!(map.offset_to_position(2), Position::new(1, 0));
}
