cfg_if::cfg_if! {
    if #[cfg(feature = "i128")] {
        pub type Int = i128;
    } else if #[cfg(feature = "bigint")] {
        pub type Int = num_bigint::BigInt;
    } else {
        pub type Int = i64;
    }
}

macro_rules! dispatch_eucring {
    ($app:ident, $args:expr) => {{
        use crate::app::utils::dispatch::*;

        try_eucring!($app, $args)
        .unwrap_or_else(|| 
            err!("`{}` is not supported for: -t {}", stringify!($app), $args.c_type)
        )
    }};
}

macro_rules! dispatch_field {
    ($app:ident, $args:expr) => {{
        use crate::app::utils::dispatch::*;

        try_field!($app, $args)
        .unwrap_or_else(|| 
            err!("`{}` requires a field, not: -t {}", stringify!($app), $args.c_type)
        )
    }};
}

pub(crate) use {dispatch_eucring, dispatch_field};

// -- internal -- //

macro_rules! try_eucring {
    ($app:ident, $args:expr) => {{
        type Z = Int;

        match $args.c_type {
            CType::Z => run!(Z, $app, $args),
            _        => try_field!($app, $args)
        }
    }}
}

macro_rules! try_field {
    ($app:ident, $args:expr) => {{
        use ringo::num::{Ratio, FF};

        type Q = Ratio<Int>;
        type F2 = FF<2>;
        type F3 = FF<3>;
        type F5 = FF<5>;
        type F7 = FF<7>;

        match $args.c_type {
            CType::Q  => run!(Q,  $app, $args),
            CType::F2 => run!(F2, $app, $args),
            CType::F3 => run!(F3, $app, $args),
            CType::F5 => run!(F5, $app, $args),
            CType::F7 => run!(F7, $app, $args),
            CType::Z  => None
        }
    }}
}

macro_rules! run {
    ($c_type:ty, $app:ident, $args:expr) => {{
        let mut app: $app<$c_type> = $app::new($args.clone());
        Some(app.run())
    }}
}

pub(crate) use {run, try_eucring, try_field};
