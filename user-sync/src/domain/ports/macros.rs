//! Defines helper macros for generating port error enums.
//!
//! Each variant gets a `thiserror` display message and a snake_case
//! constructor whose fields accept `impl Into<T>`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            #[must_use]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            #[must_use]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( {
                    $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
                } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $( $(#[$field_meta])* $field : $ty ),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum ExamplePortError {
            Throttled => "throttled",
            Rejected {
                /// Remote error code.
                code: String,
            } => "rejected: {code}",
            Status { status: u16 } => "status {status}",
            Detailed { code: String, status: u16 } => "{code} ({status})",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        let err = ExamplePortError::throttled();
        assert_eq!(err, ExamplePortError::Throttled);
        assert_eq!(err.to_string(), "throttled");
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::rejected("SUBSCRIPTION_NOT_FOUND");
        assert_eq!(err.to_string(), "rejected: SUBSCRIPTION_NOT_FOUND");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExamplePortError::status(404_u16);
        assert_eq!(err.to_string(), "status 404");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = ExamplePortError::detailed("UNKNOWN_ERROR", 500_u16);
        assert_eq!(err.to_string(), "UNKNOWN_ERROR (500)");
    }
}
