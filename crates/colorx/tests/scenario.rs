use colorx::error::{ColorFormatError, OutOfBoundsError};
use colorx::repr::{Argb, Cmyk, Hex, Hsl, Hsla, Hsv, Rgb};
use colorx::{assert_close_enough, Color, PackedColor};

const PINK: PackedColor = PackedColor::new(0xffe9_1e63);

#[test]
fn pink_to_everything() -> Result<(), ColorFormatError> {
    assert_eq!(PINK.to_hex_string(), "#FFE91E63");
    assert_eq!(PINK.to_hex(), "#e91e63".parse::<Hex>()?);
    assert_eq!(PINK.to_rgb(), Rgb::new(233, 30, 99));
    assert_eq!(PINK.to_argb(), Argb::new(255, 233, 30, 99));
    assert_eq!(
        PINK.to_hsl(),
        Hsl::new(339.60591133004925, 0.8218623481781375, 0.5156862745098039)
    );
    assert_eq!(
        PINK.to_hsla(),
        Hsla::new(339.60591133004925, 0.8218623481781375, 0.5156862745098039, 1.0)
    );
    assert_eq!(
        PINK.to_hsv(),
        Hsv::new(339.60591133004925, 0.871244635193133, 0.9137254901960784)
    );
    assert_eq!(
        PINK.to_cmyk(),
        Cmyk::new(0.0, 0.871244635193133, 0.5751072961373391, 0.0862745098039216)
    );
    Ok(())
}

#[test]
fn pink_harmonies() {
    assert_eq!(PINK.complementary(), PackedColor::from_rgb(0x1e, 0xe9, 0xa4));
    assert_eq!(
        PINK.triadic(),
        (
            PackedColor::from_rgb(0x63, 0xe9, 0x1e),
            PackedColor::from_rgb(0x1e, 0x63, 0xe9)
        )
    );

    // The same harmonies in every representation.
    let hsl = PINK.to_hsl();
    assert_eq!(hsl.complementary().to_packed(), PINK.complementary());
    let (first, second, third) = PINK.to_cmyk().tetradic();
    assert_eq!(
        [first.to_packed(), second.to_packed(), third.to_packed()],
        [
            PackedColor::new(0xffc9_e91e),
            PackedColor::new(0xff1e_e9a4),
            PackedColor::new(0xff3e_1ee9)
        ]
    );
    let (left, right) = PINK.to_hex().analogous();
    assert_eq!((left.as_str(), right.as_str()), ("#FFE93E1E", "#FFE91EC9"));
}

#[test]
fn pink_luminance() {
    assert_close_enough!(PINK.luminance(), 0.1915303712121659);
    assert_close_enough!(PINK.complementary().luminance(), 0.6123418216551351);
    assert!(Rgb::new(233, 30, 99).is_dark());
    assert!(!Rgb::new(30, 233, 164).is_dark());
    assert_eq!(Rgb::new(233, 30, 99).contrasting(), Rgb::new(255, 255, 255));
    assert_eq!(Rgb::new(30, 233, 164).contrasting(), Rgb::new(0, 0, 0));
    assert_eq!(PINK.to_cmyk().contrasting(), Cmyk::new(0.0, 0.0, 0.0, 0.0));
}

#[test]
fn pink_ramps() -> Result<(), OutOfBoundsError> {
    let shades: Vec<String> = PINK.to_hex().shades(10)?.map(|c| c.to_string()).collect();
    assert_eq!(
        shades,
        [
            "#FFE91E63", "#FFD81557", "#FFC0134E", "#FFA81044", "#FF900E3A", "#FF780C30",
            "#FF600927", "#FF48071D", "#FF300513", "#FF18020A", "#FF000000",
        ]
    );

    let tints: Vec<String> = PINK.to_hex().default_tints().map(|c| c.to_string()).collect();
    assert_eq!(
        tints,
        [
            "#FFE91E63", "#FFEB3473", "#FFED4B82", "#FFF06192", "#FFF278A1", "#FFF48EB1",
            "#FFF6A5C1", "#FFF8BBD0", "#FFFBD2E0", "#FFFDE8EF", "#FFFFFFFF",
        ]
    );

    let rgb = Rgb::new(128, 128, 128).shades(4)?;
    assert_eq!(
        rgb.collect::<Vec<_>>(),
        [
            Rgb::new(128, 128, 128),
            Rgb::new(96, 96, 96),
            Rgb::new(64, 64, 64),
            Rgb::new(32, 32, 32),
            Rgb::new(0, 0, 0),
        ]
    );
    Ok(())
}

#[test]
fn invalid_input() {
    assert_eq!(
        Hex::new("not-a-color"),
        Err(ColorFormatError::UnknownFormat)
    );
    assert!("#GGGGGG".parse::<PackedColor>().is_err());

    let error = PINK.shades(0).err();
    assert_eq!(error, Some(OutOfBoundsError::new(0_usize, 1..=usize::MAX)));
    assert_eq!(
        PINK.tints(0).err().map(|e| e.to_string()),
        Some("0 does not fit into range 1..".to_string())
    );
}
