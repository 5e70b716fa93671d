/// Bit offset of each raster channel `(R, G, B, A)` inside a packed color.
const CHANNEL_SHIFT: [u32; 4] = [16, 8, 0, 24];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

pub fn decode(color: u32) -> Rgba {
    let ch = CHANNEL_SHIFT.map(|shift| ((color >> shift) & 0xFF) as u8);
    Rgba::from_array(ch)
}

pub fn encode(rgba: Rgba) -> u32 {
    rgba.to_array()
        .iter()
        .zip(CHANNEL_SHIFT)
        .fold(0, |acc, (&v, shift)| acc | (u32::from(v) << shift))
}
