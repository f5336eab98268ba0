//! Hot-path indexing
//!
//! Debug builds keep normal bounds-checked indexing so contract violations
//! panic with a useful message. Release builds drop the check.
//!
//! Usage:
//! ```rust
//! use disturbance_engine::fast;
//!
//! let cells = vec![10u32, 20, 30];
//! let second = *fast!(cells, [1]);
//! assert_eq!(second, 20);
//!
//! let mut slots = vec![0u32; 3];
//! fast!(slots, [2] = 7);
//! *fast!(mut slots, [0]) += 1;
//! assert_eq!(slots, vec![1, 0, 7]);
//! ```

/// Indexing that is only bounds-checked under `debug_assertions`.
///
/// Callers own the bound: every use site must already guarantee the index
/// is inside the slice, the macro only decides whether that is re-checked.
#[macro_export]
macro_rules! fast {
    // Mutable access: fast!(mut slice, [index])
    (mut $slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &mut $slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked_mut($index) }
        }
    }};

    // Shared read: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn read_returns_element() {
        let indices = vec![4u32, 8, 15, 16];
        assert_eq!(*fast!(indices, [3]), 16);
    }

    #[test]
    fn write_and_mut_access_update_in_place() {
        let mut indices = vec![0u32; 4];
        fast!(indices, [1] = 42);
        *fast!(mut indices, [2]) += 5;
        assert_eq!(indices, vec![0, 42, 5, 0]);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn debug_build_still_checks_bounds() {
        let indices = vec![1u32, 2, 3];
        let _ = *fast!(indices, [3]);
    }
}
