//===========================================================================//

// Fills `$buf` from `$reader`, returning `$truncated` from the enclosing
// function if the stream ends first.
macro_rules! read_exact_or {
    ($reader:expr, $buf:expr, $truncated:expr) => {
        if let Err(error) = $reader.read_exact($buf) {
            return Err($crate::error::Error::from_read(error, $truncated));
        }
    };
}

//===========================================================================//
