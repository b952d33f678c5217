/// `Bit` conversions and serialization.
pub mod bit;
