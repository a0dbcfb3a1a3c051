use std::fmt::{self, Write};

/// A field value that can be written as a property.
pub trait PropertyValue {
    /// Returns true if the value is its type's empty value, which `omitempty` fields skip.
    fn is_empty_value(&self) -> bool;

    fn write_value(&self, out: &mut dyn Write) -> fmt::Result;
}

impl PropertyValue for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn write_value(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_str(self)
    }
}

impl PropertyValue for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn write_value(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_str(self)
    }
}

impl PropertyValue for &str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn write_value(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_str(self)
    }
}

impl PropertyValue for bool {
    fn is_empty_value(&self) -> bool {
        !*self
    }

    fn write_value(&self, out: &mut dyn Write) -> fmt::Result {
        write!(out, "{}", self)
    }
}

macro_rules! impl_integer_value {
    ($($int:ty),* $(,)?) => {
        $(
            impl PropertyValue for $int {
                fn is_empty_value(&self) -> bool {
                    *self == 0
                }

                fn write_value(&self, out: &mut dyn Write) -> fmt::Result {
                    write!(out, "{}", self)
                }
            }
        )*
    };
}

impl_integer_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
