/// Variadic Binder Module
///
/// Binds an ordered tuple of output references to consecutive columns of the
/// current row: the first output reads column `first`, the next one column
/// `first + 1`, and so on. Binding stops at the first failure; outputs
/// before it keep their new values, the rest are left untouched.

use crate::core::db::{ColumnDecodable, ResultSet};
use crate::core::Result;

/// An ordered list of outputs that can be filled from consecutive columns.
pub trait BindColumns {
    /// Number of columns this binder consumes.
    const ARITY: usize;

    /// Fills the outputs starting at the 1-based column `first`.
    fn bind_columns(self, rs: &ResultSet, first: u32) -> Result<()>;
}

impl BindColumns for () {
    const ARITY: usize = 0;

    fn bind_columns(self, _rs: &ResultSet, _first: u32) -> Result<()> {
        Ok(())
    }
}

// Each arity binds its head and hands the tail tuple to the next arity down.
macro_rules! impl_bind_columns {
    ($head:ident $(, $tail:ident)*) => {
        impl<'a, $head: ColumnDecodable $(, $tail: ColumnDecodable)*> BindColumns
            for (&'a mut $head, $(&'a mut $tail,)*)
        {
            const ARITY: usize = 1 + <($(&'a mut $tail,)*) as BindColumns>::ARITY;

            #[allow(non_snake_case)]
            fn bind_columns(self, rs: &ResultSet, first: u32) -> Result<()> {
                let ($head, $($tail,)*) = self;
                *$head = <$head as ColumnDecodable>::decode(rs, first)?;
                ($($tail,)*).bind_columns(rs, first + 1)
            }
        }

        impl_bind_columns!($($tail),*);
    };
    () => {};
}

impl_bind_columns!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);

/// Runs `execute_query_values` with a list of output places instead of a tuple.
///
/// ```ignore
/// let (mut id, mut name) = (0i64, String::new());
/// query_values!(conn, "SELECT id, name FROM users WHERE id = 1", id, name);
/// ```
#[macro_export]
macro_rules! query_values {
    ($conn:expr, $sql:expr $(, $out:expr)* $(,)?) => {
        $conn.execute_query_values($sql, ($(&mut $out,)*))
    };
}
