use std::os::raw::c_void;

// Calls made from the interposing image are not interposed, so the libc
// symbol is the real primitive.
macro_rules! intercept {
    ($name: ident (64): $fn_sig: ty) => {
        $crate::macros::intercept_inner!($name: $fn_sig, $crate::libc::wide::$name);
    };
    ($name: ident: $fn_sig: ty) => {
        $crate::macros::intercept_inner!($name: $fn_sig, $crate::libc::$name);
    };
}

pub(crate) use intercept;

macro_rules! intercept_inner {
    ($name: ident: $fn_sig: ty, $original: path) => {
        const _: () = {
            const _: $fn_sig = $name;
            const _: $fn_sig = $crate::libc::$name;

            #[cfg(not(test))] // Don't interpose on the test binary
            #[used]
            #[allow(dead_code)]
            #[unsafe(link_section = "__DATA,__interpose")]
            static mut _INTERPOSE_ENTRY: $crate::macros::InterposeEntry =
                $crate::macros::InterposeEntry {
                    _new: $name as _,
                    _old: $crate::libc::$name as _,
                };
        };

        mod $name {
            #[allow(unused)]
            use super::*;
            pub fn original() -> $fn_sig {
                $original
            }
        }
    };
}

pub(crate) use intercept_inner;

#[doc(hidden)]
#[repr(C)]
pub struct InterposeEntry {
    pub _new: *const c_void,
    pub _old: *const c_void,
}
