use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// One colour channel cycling through `(iterations mod modulus) * scale`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChannelCycle {
    modulus: u32,
    scale: u32,
}

impl ChannelCycle {
    #[must_use]
    pub const fn modulus(&self) -> u32 {
        self.modulus
    }

    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    fn value(&self, iterations: u32) -> u8 {
        let value = (iterations % self.modulus).saturating_mul(self.scale);
        value.min(u32::from(u8::MAX)) as u8
    }
}

/// Banded false-colour palette: each channel cycles with its own period so
/// iteration-count boundaries show up as contours.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BandedPalette {
    kind: PaletteKind,
    red: ChannelCycle,
    green: ChannelCycle,
    blue: ChannelCycle,
    interior: Option<Colour>,
}

impl BandedPalette {
    pub fn new(
        kind: PaletteKind,
        red: (u32, u32),
        green: (u32, u32),
        blue: (u32, u32),
    ) -> Result<Self, MandelbrotError> {
        Ok(Self {
            kind,
            red: channel("red", red)?,
            green: channel("green", green)?,
            blue: channel("blue", blue)?,
            interior: None,
        })
    }

    #[must_use]
    pub fn from_kind(kind: PaletteKind) -> Self {
        let (red, green, blue) = kind.cycles();

        Self {
            kind,
            red,
            green,
            blue,
            interior: None,
        }
    }

    /// Colours points that never escaped with `colour` instead of running
    /// the interior count `0` through the channel formula. Points that
    /// escaped on the first update keep the formula colour for `0`.
    #[must_use]
    pub fn with_interior(mut self, colour: Colour) -> Self {
        self.interior = Some(colour);
        self
    }

    #[must_use]
    pub fn with_interior_opt(self, colour: Option<Colour>) -> Self {
        match colour {
            Some(colour) => self.with_interior(colour),
            None => self,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    #[must_use]
    pub fn interior(&self) -> Option<Colour> {
        self.interior
    }
}

impl Default for BandedPalette {
    fn default() -> Self {
        Self::from_kind(PaletteKind::default())
    }
}

impl ColourMap for BandedPalette {
    fn map(&self, iterations: u32) -> Colour {
        Colour::opaque(
            self.red.value(iterations),
            self.green.value(iterations),
            self.blue.value(iterations),
        )
    }

    fn map_escape(&self, escape: Option<u32>) -> Colour {
        match (escape, self.interior) {
            (None, Some(colour)) => colour,
            _ => self.map(escape.unwrap_or(0)),
        }
    }

    fn display_name(&self) -> &str {
        self.kind.display_name()
    }
}

fn channel(name: &'static str, (modulus, scale): (u32, u32)) -> Result<ChannelCycle, MandelbrotError> {
    if modulus == 0 {
        return Err(MandelbrotError::ZeroPaletteModulus { channel: name });
    }

    Ok(ChannelCycle { modulus, scale })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PaletteKind {
    /// Channels cycle with periods 7/16/32.
    #[default]
    Banded,
    /// Channels cycle with periods 8/16/32.
    Classic,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[Self::Banded, Self::Classic];

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Banded => "Banded",
            Self::Classic => "Classic",
        }
    }

    const fn cycles(&self) -> (ChannelCycle, ChannelCycle, ChannelCycle) {
        let modulus_red = match self {
            Self::Banded => 7,
            Self::Classic => 8,
        };

        (
            ChannelCycle { modulus: modulus_red, scale: 32 },
            ChannelCycle { modulus: 16, scale: 16 },
            ChannelCycle { modulus: 32, scale: 8 },
        )
    }
}
