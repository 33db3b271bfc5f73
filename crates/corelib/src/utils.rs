// use values from environment or set a default
#[macro_export]
macro_rules! option_usize_env {
    ($s:expr_2021, $d:expr_2021) => {
        $crate::utils::parse_string_as_usize(option_env!($s), $d)
    };
}

pub const fn parse_string_as_usize(key: Option<&'static str>, default: usize) -> usize {
    match key {
        None => default,
        Some(num) => {
            if num.is_empty() {
                return default;
            }
            // str::parse is not const yet, walk the bytes by hand
            let mut res: usize = 0;
            let mut bytes = num.as_bytes();
            while let [byte, rest @ ..] = bytes {
                bytes = rest;
                if let b'0'..=b'9' = byte {
                    res *= 10;
                    res += (*byte - b'0') as usize;
                } else {
                    return default;
                }
            }
            res
        }
    }
}
