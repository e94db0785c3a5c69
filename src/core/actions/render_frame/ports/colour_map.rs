use crate::core::data::colour::Colour;

pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32) -> Colour;

    /// Colours an escape result. Points that never escaped go through
    /// [`ColourMap::map`] with `0` unless the map overrides this.
    fn map_escape(&self, escape: Option<u32>) -> Colour {
        self.map(escape.unwrap_or(0))
    }

    fn display_name(&self) -> &str;
}
