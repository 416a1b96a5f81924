pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Checks that `$index` addresses an existing slot of a container holding
/// `$len` elements, returning an `IndexOutOfBounds` error from the enclosing
/// function otherwise.
#[macro_export]
macro_rules! verify_index {
    ($index:expr, $len:expr) => {{
        $crate::result::verify_index($index, $len)?;
    }};
}

#[inline]
pub fn verify_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        out_of_bounds(index, len)
    }
}

#[cold]
pub fn out_of_bounds(index: usize, len: usize) -> Result<()> {
    Err(crate::error::ErrorKind::IndexOutOfBounds { index, len }.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(index: usize, len: usize) -> Result<usize> {
        verify_index!(index, len);
        Ok(index)
    }

    #[test]
    fn test_verify_index() {
        assert!(verify_index(0, 1).is_ok());
        assert!(verify_index(1, 1).is_err());
        assert!(verify_index(0, 0).is_err());
    }

    #[test]
    fn test_verify_index_macro() {
        assert_eq!(checked(2, 3).unwrap(), 2);
        let err = checked(3, 3).unwrap_err();
        assert!(err.is_out_of_bounds());
    }
}
