// src/macros.rs
#[macro_export]
macro_rules! s {
    // () → String::new(); (expr) → String::from(expr)
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate &str-likes into one String
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[macro_export]
macro_rules! strings {
    // Vec<String> from string literals (table rows/headers)
    ($($x:expr),* $(,)?) => {
        vec![$(::std::string::String::from($x)),*]
    };
}
