/// Type Extractor Module
///
/// Maps a requested Rust type onto the matching [`ResultSet`] accessor. The
/// choice is made by trait resolution at each call site:
///
/// - `f32`, `f64` read through `get_double`
/// - signed integers read through `get_int64`
/// - unsigned integers read through `get_uint64`
/// - `String` reads through `get_string`
///
/// Any other implementor falls back to the default `decode`, which reports
/// [`SqlConnError::UnsupportedType`] without touching the cursor.

use crate::core::db::ResultSet;
use crate::core::{Result, SqlConnError};
use std::any;

mod sealed {
    pub trait Sealed {}
}

/// A type that can be read out of one result column.
///
/// This trait is sealed: the set of decodable types is fixed by this crate.
pub trait ColumnDecodable: sealed::Sealed + Sized {
    /// Reads the 1-based `column` of the cursor's current row as `Self`.
    fn decode(_rs: &ResultSet, _column: u32) -> Result<Self> {
        Err(SqlConnError::UnsupportedType(any::type_name::<Self>()))
    }
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl ColumnDecodable for $t {
                fn decode(rs: &ResultSet, column: u32) -> Result<Self> {
                    let wide = rs.get_double(column)?;
                    let narrow = wide as $t;
                    if wide.is_finite() && !narrow.is_finite() {
                        return Err(SqlConnError::Conversion {
                            column,
                            target: any::type_name::<$t>(),
                            reason: format!("{wide} is out of range"),
                        });
                    }
                    Ok(narrow)
                }
            }
        )*
    };
}

macro_rules! impl_integer {
    ($accessor:ident => $($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl ColumnDecodable for $t {
                fn decode(rs: &ResultSet, column: u32) -> Result<Self> {
                    let wide = rs.$accessor(column)?;
                    <$t>::try_from(wide).map_err(|e| SqlConnError::Conversion {
                        column,
                        target: any::type_name::<$t>(),
                        reason: format!("{wide}: {e}"),
                    })
                }
            }
        )*
    };
}

macro_rules! impl_unsupported {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl ColumnDecodable for $t {}
        )*
    };
}

impl_float!(f32, f64);
impl_integer!(get_int64 => i8, i16, i32, i64, isize);
impl_integer!(get_uint64 => u8, u16, u32, u64, usize);
impl_unsupported!(bool, char, i128, u128);

impl sealed::Sealed for String {}

impl ColumnDecodable for String {
    fn decode(rs: &ResultSet, column: u32) -> Result<Self> {
        rs.get_string(column)
    }
}

/// Decodes `column` of the current row as `T`.
pub fn extract<T: ColumnDecodable>(rs: &ResultSet, column: u32) -> Result<T> {
    T::decode(rs, column)
}
