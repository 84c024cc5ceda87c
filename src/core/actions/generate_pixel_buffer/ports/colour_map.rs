use crate::core::data::colour::Colour;

/// Maps one computed sample value to a display colour.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;

    fn display_name(&self) -> &str;
}
