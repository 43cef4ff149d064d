use squaregrid::config::GridConfig;
use squaregrid::theme::{Color, Palette};

#[test]
fn test_color_from_hex_6() {
    let color = Color::from_hex("#1A1A1A").unwrap();
    assert_eq!(color, Color::rgb(0x1a, 0x1a, 0x1a));
    assert_eq!(color.a, 255);
}

#[test]
fn test_color_from_hex_8() {
    let color = Color::from_hex("#0B1F3A80").unwrap();
    assert_eq!(color, Color::rgba(0x0b, 0x1f, 0x3a, 0x80));
}

#[test]
fn test_color_from_hex_3() {
    assert_eq!(Color::from_hex("#abc").unwrap(), Color::rgb(0xaa, 0xbb, 0xcc));
}

#[test]
fn test_color_display_roundtrips_through_parse() {
    let color = Color::rgba(0x0d, 0x0d, 0x0d, 0x40);
    let text = color.to_string();
    assert_eq!(text.parse::<Color>().unwrap(), color);
}

#[test]
fn test_default_palette_colors() {
    let palette = Palette::from_config(&GridConfig::default());
    assert_eq!(palette.border, 0xFF333333);
    assert_eq!(palette.fill, 0xFF1A1A1A);
    assert_eq!(palette.hover_fill, 0xFF0B1F3A);
    assert_eq!(palette.background, 0xFF0D0D0D);
}

#[test]
fn test_palette_follows_config() {
    let config = GridConfig {
        fill_color: Color::rgb(1, 2, 3),
        ..GridConfig::default()
    };
    assert_eq!(Palette::from_config(&config).fill, 0xFF010203);
}
