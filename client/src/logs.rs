use colored::Color;

/// Format a key/value pair with optional color overrides.
///
/// Requires the `colored::Colorize` trait to be in scope.
///
/// Examples, where `key_color` and `value_color` are `LogColor` values:
/// - fmt_kv!(key, value)
/// - fmt_kv!(key, value, key_color)
/// - fmt_kv!(key, value, key_color, value_color)
#[macro_export]
macro_rules! fmt_kv {
    ($key:expr, $value:expr $(,)?) => {
        $crate::fmt_kv!(
            $key,
            $value,
            $crate::LogColor::Highlight,
            $crate::LogColor::Muted
        )
    };
    ($key:expr, $value:expr, $key_color:expr $(,)?) => {
        $crate::fmt_kv!($key, $value, $key_color, $crate::LogColor::Muted)
    };
    ($key:expr, $value:expr, $key_color:expr, $value_color:expr $(,)?) => {{
        use ::colored::Colorize as _;
        let __k = ::std::string::ToString::to_string(&$key);
        let __v = ::std::string::ToString::to_string(&$value);
        ::std::format!("{}: {}", __k.color($key_color), __v.color($value_color))
    }};
}

/// Prints a key/value pair to stdout. Takes the same arguments as [`fmt_kv!`].
#[macro_export]
macro_rules! print_kv {
    ($($arg:expr),+ $(,)?) => {
        ::std::println!("{}", $crate::fmt_kv!($($arg),+))
    };
}

/// Prints a key/value pair to stderr. Takes the same arguments as [`fmt_kv!`], but the key color
/// defaults to [`LogColor::Error`].
#[macro_export]
macro_rules! eprint_kv {
    ($key:expr, $value:expr $(,)?) => {
        ::std::eprintln!("{}", $crate::fmt_kv!($key, $value, $crate::LogColor::Error))
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::eprintln!("{}", $crate::fmt_kv!($($arg),+))
    };
}

#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Error,
    Warning,
    Success,
    Header,
    Info,
    Muted,
}

#[rustfmt::skip]
mod unformatted {
    use super::*;

    pub fn fmt_divider() -> String { "-".repeat(80) }

    impl From<LogColor> for Color {
        fn from(value: LogColor) -> Color {
            match value {
                LogColor::Highlight  => Color::TrueColor { r: 255, g: 215, b: 87  },
                LogColor::Error      => Color::TrueColor { r: 255, g: 0,   b: 45  },
                LogColor::Warning    => Color::TrueColor { r: 180, g: 105, b: 0   },
                LogColor::Success    => Color::TrueColor { r: 0,   g: 200, b: 120 },
                LogColor::Header     => Color::TrueColor { r: 160, g: 90,  b: 255 },
                LogColor::Info       => Color::TrueColor { r: 0,   g: 95,  b: 255 },
                LogColor::Muted      => Color::TrueColor { r: 95,  g: 95,  b: 95  },
            }
        }
    }
}

pub use unformatted::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_and_print_kv() {
        colored::control::set_override(false);
        assert_eq!(fmt_kv!("hello", "world"), "hello: world");
        assert_eq!(fmt_kv!("hello", 3, LogColor::Info), "hello: 3");
        let _ = fmt_kv!("hello", "world", LogColor::Info, LogColor::Highlight);
        print_kv!("hello", "world");
        print_kv!("hello", "world", LogColor::Success);
        eprint_kv!("hello", "world");
        eprint_kv!("hello", "world", LogColor::Warning, LogColor::Highlight);
    }

    #[test]
    fn divider_width() {
        assert_eq!(fmt_divider().len(), 80);
    }
}
