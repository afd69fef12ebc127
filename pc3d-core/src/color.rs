/// Color values and parsing of the accepted color notations
use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while_m_n},
    character::complete::{digit1, multispace0},
    combinator::{all_consuming, map_res},
    sequence::{delimited, preceded, tuple},
    IResult,
};
use serde::{Serialize, Serializer};

use crate::catalog::{self, Category};
use crate::error::{ConfigError, Result};

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to 0..1
    pub fn to_channels(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Build from 0..1 channels, clamping out-of-range values
    pub fn from_channels(channels: [f32; 3]) -> Self {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(to_u8(channels[0]), to_u8(channels[1]), to_u8(channels[2]))
    }

    /// Perceived brightness in 0..1 (Rec. 709 weights)
    pub fn luminance(self) -> f32 {
        let [r, g, b] = self.to_channels();
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl std::str::FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

/// Parse any accepted color notation: `#rrggbb`, `#rgb`, `rgb(r, g, b)`
/// or the id of a color swatch from the catalog.
pub fn parse_color(input: &str) -> Result<Rgb> {
    let trimmed = input.trim();

    if let Some(option) = catalog::find_option(Category::Color, &trimmed.to_ascii_lowercase()) {
        if let Some(swatch) = option.swatch {
            return Ok(swatch);
        }
    }

    match all_consuming(alt((hex_color, rgb_function)))(trimmed) {
        Ok((_, color)) => Ok(color),
        Err(_) => Err(ConfigError::InvalidColor(input.to_string())),
    }
}

fn hex_color(input: &str) -> IResult<&str, Rgb> {
    let (input, _) = tag("#")(input)?;
    alt((long_hex, short_hex))(input)
}

fn long_hex(input: &str) -> IResult<&str, Rgb> {
    let (input, (r, g, b)) = all_consuming(tuple((hex_pair, hex_pair, hex_pair)))(input)?;
    Ok((input, Rgb::new(r, g, b)))
}

fn short_hex(input: &str) -> IResult<&str, Rgb> {
    let (input, (r, g, b)) = all_consuming(tuple((hex_single, hex_single, hex_single)))(input)?;
    Ok((input, Rgb::new(r, g, b)))
}

fn hex_pair(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |s: &str| {
        u8::from_str_radix(s, 16)
    })(input)
}

// #abc expands to #aabbcc
fn hex_single(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 1, |c: char| c.is_ascii_hexdigit()), |s: &str| {
        u8::from_str_radix(s, 16).map(|v| v * 17)
    })(input)
}

fn rgb_function(input: &str) -> IResult<&str, Rgb> {
    let (input, _) = tag_no_case("rgb")(input)?;
    let (input, _) = preceded(multispace0, tag("("))(input)?;
    let (input, (r, _, g, _, b)) =
        tuple((rgb_channel, tag(","), rgb_channel, tag(","), rgb_channel))(input)?;
    let (input, _) = tag(")")(input)?;
    Ok((input, Rgb::new(r, g, b)))
}

fn rgb_channel(input: &str) -> IResult<&str, u8> {
    delimited(multispace0, map_res(digit1, str::parse::<u8>), multispace0)(input)
}
