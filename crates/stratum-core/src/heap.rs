//! Heap delegation.
//!
//! Thin pass-through to the global allocator the host environment (or the
//! embedded linker script) provides. No pooling, no accounting, and no
//! alignment guarantees beyond the allocator's own; zero-size requests
//! return null without touching the allocator.

extern crate alloc;

use alloc::alloc::{Layout, alloc, alloc_zeroed, dealloc, realloc};
use core::ptr;

// Alignment handed to every request; matches the widest primitive the
// runtime's generated code stores through these pointers.
const HEAP_ALIGN: usize = 16;

fn layout_for(size: usize) -> Option<Layout> {
    Layout::from_size_align(size, HEAP_ALIGN).ok()
}

/// Acquires `size` bytes from the global allocator.
///
/// Returns null when `size` is 0, the size is unrepresentable, or the
/// allocator reports exhaustion. The failure indicator passes through to
/// the caller; nothing here retries.
pub fn heap_alloc(size: usize) -> *mut u8 {
    if size == 0 {
        return ptr::null_mut();
    }
    match layout_for(size) {
        Some(layout) => unsafe { alloc(layout) },
        None => ptr::null_mut(),
    }
}

/// Acquires `size` zeroed bytes from the global allocator.
pub fn heap_alloc_zeroed(size: usize) -> *mut u8 {
    if size == 0 {
        return ptr::null_mut();
    }
    match layout_for(size) {
        Some(layout) => unsafe { alloc_zeroed(layout) },
        None => ptr::null_mut(),
    }
}

/// Resizes an allocation made by [`heap_alloc`].
///
/// A null `ptr` behaves as a fresh allocation; `new_size` 0 releases and
/// returns null.
///
/// # Safety
///
/// `ptr` must be null or an allocation obtained from this module with
/// exactly `old_size` bytes, not yet released.
pub unsafe fn heap_realloc(ptr: *mut u8, old_size: usize, new_size: usize) -> *mut u8 {
    if ptr.is_null() {
        return heap_alloc(new_size);
    }
    if new_size == 0 {
        unsafe { heap_free(ptr, old_size) };
        return ptr::null_mut();
    }
    match layout_for(old_size) {
        Some(layout) => unsafe { realloc(ptr, layout, new_size) },
        None => ptr::null_mut(),
    }
}

/// Releases an allocation made by [`heap_alloc`].
///
/// Null pointers and zero sizes are ignored.
///
/// # Safety
///
/// `ptr` must be null or an allocation obtained from this module with
/// exactly `size` bytes, not yet released.
pub unsafe fn heap_free(ptr: *mut u8, size: usize) {
    if ptr.is_null() || size == 0 {
        return;
    }
    if let Some(layout) = layout_for(size) {
        unsafe { dealloc(ptr, layout) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_write_free() {
        let p = heap_alloc(64);
        assert!(!p.is_null());
        unsafe {
            for i in 0..64 {
                p.add(i).write(i as u8);
            }
            assert_eq!(p.add(63).read(), 63);
            heap_free(p, 64);
        }
    }

    #[test]
    fn test_zero_size_returns_null() {
        assert!(heap_alloc(0).is_null());
        assert!(heap_alloc_zeroed(0).is_null());
    }

    #[test]
    fn test_alloc_zeroed_is_zeroed() {
        let p = heap_alloc_zeroed(32);
        assert!(!p.is_null());
        unsafe {
            for i in 0..32 {
                assert_eq!(p.add(i).read(), 0);
            }
            heap_free(p, 32);
        }
    }

    #[test]
    fn test_realloc_grows_preserving_prefix() {
        let p = heap_alloc(8);
        assert!(!p.is_null());
        unsafe {
            for i in 0..8 {
                p.add(i).write(i as u8 + 1);
            }
            let q = heap_realloc(p, 8, 128);
            assert!(!q.is_null());
            for i in 0..8 {
                assert_eq!(q.add(i).read(), i as u8 + 1);
            }
            heap_free(q, 128);
        }
    }

    #[test]
    fn test_realloc_null_acts_as_alloc() {
        let p = unsafe { heap_realloc(core::ptr::null_mut(), 0, 16) };
        assert!(!p.is_null());
        unsafe { heap_free(p, 16) };
    }
}
