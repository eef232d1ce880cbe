#[macro_export]
macro_rules! impl_bounded_newtype {
    ($name:ident, $inner:ty, $range:expr, $variant:ident) => {
        impl $name {
            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl TryFrom<$inner> for $name {
            type Error = $crate::error::BoundsError;

            fn try_from(value: $inner) -> Result<Self, Self::Error> {
                if ($range).contains(&value) {
                    Ok(Self(value))
                } else {
                    Err($crate::error::BoundsError::$variant(value))
                }
            }
        }
    };
}
