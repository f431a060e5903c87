use colorx::error::ColorFormatError;
use colorx::repr::Hex;
use colorx::Color;

fn swatch(label: &str, color: &Hex) {
    let ink = if color.is_dark() { "light" } else { "dark" };
    println!("    {:<14} {}  ({} text)", label, color, ink);
}

fn main() -> Result<(), ColorFormatError> {
    let input = std::env::args().nth(1).unwrap_or_else(|| "#E91E63".to_string());
    let color: Hex = input.parse()?;

    println!("\n{}", color);
    println!("    rgb            {}", color.to_rgb());
    println!("    hsl            {}", color.to_hsl());
    println!("    hsv            {}", color.to_hsv());
    println!("    cmyk           {}", color.to_cmyk());
    println!("    luminance      {:.4}", color.luminance());

    println!("\nHarmonies");
    swatch("complementary", &color.complementary());
    let (first, second) = color.triadic();
    swatch("triadic", &first);
    swatch("", &second);
    let (first, second, third) = color.tetradic();
    swatch("tetradic", &first);
    swatch("", &second);
    swatch("", &third);
    let (first, second) = color.analogous();
    swatch("analogous", &first);
    swatch("", &second);

    println!("\nShades");
    for (index, shade) in color.default_shades().enumerate() {
        swatch(&format!("{:>2}", index), &shade);
    }

    println!("\nTints");
    for (index, tint) in color.default_tints().enumerate() {
        swatch(&format!("{:>2}", index), &tint);
    }

    println!();
    Ok(())
}
