macro_rules! intercept {
    ($name: ident (64): $fn_sig: ty) => {
        $crate::macros::intercept_inner! {
            $name (64): $fn_sig;

            #[cfg(test)]
            #[test]
            fn symbol_64_exists() {
                ::core::assert!($crate::macros::symbol_exists(::core::stringify!($name)));
                ::core::assert!($crate::macros::symbol_exists(::core::concat!(
                    ::core::stringify!($name),
                    64
                )));
            }
        }
        #[cfg(not(test))] // Don't interpose on the test binary
        const _: () = {
            #[unsafe(naked)]
            #[unsafe(export_name = ::core::concat!(::core::stringify!($name), 64))]
            pub unsafe extern "C" fn interpose_fn() {
                #[cfg(target_arch = "aarch64")]
                ::core::arch::naked_asm!("b {}", sym $name);
                #[cfg(target_arch = "x86_64")]
                ::core::arch::naked_asm!("jmp {}", sym $name);
            }
        };
    };
    ($name: ident: $fn_sig: ty) => {
        $crate::macros::intercept_inner! {
            $name: $fn_sig;

            #[cfg(test)]
            #[test]
            fn symbol_64_does_not_exist() {
                ::core::assert!($crate::macros::symbol_exists(::core::stringify!($name)));
                ::core::assert!(!$crate::macros::symbol_exists(::core::concat!(
                    ::core::stringify!($name),
                    64
                )));
            }
        }
    };
}

pub(crate) use intercept;

#[cfg(test)]
#[doc(hidden)]
pub(crate) fn symbol_exists(name: &str) -> bool {
    let name = std::ffi::CString::new(name).unwrap();
    !unsafe { libc::dlsym(libc::RTLD_DEFAULT, name.as_ptr()) }.is_null()
}

#[doc(hidden)]
#[cold]
pub fn unresolved(symbol: &str) -> ! {
    libc_print::libc_eprintln!("nix-vendor: cannot resolve the real `{}`", symbol);
    unsafe { libc::abort() }
}

// The real primitive is the next definition after this library
// (`RTLD_NEXT`), resolved once into a write-once slot. A constructor forces
// every slot while the loader initializes the library, before `main`.
macro_rules! intercept_inner {
    ($name: ident $(($wide: literal))?: $fn_sig: ty; $test_fn: item) => {
        const _: $fn_sig = $name;
        const _: $fn_sig = $crate::libc::$name;

        #[cfg(not(test))] // Don't interpose on the test binary
        const _: () = {
            #[unsafe(naked)]
            #[unsafe(export_name = ::core::stringify!($name))]
            pub unsafe extern "C" fn interpose_fn() {
                #[cfg(target_arch = "aarch64")]
                ::core::arch::naked_asm!("b {}", sym $name);
                #[cfg(target_arch = "x86_64")]
                ::core::arch::naked_asm!("jmp {}", sym $name);
            }
        };
        mod $name {
            #[allow(unused)]
            use super::*;

            const SYMBOL: &str = ::core::concat!(::core::stringify!($name), $($wide,)? "\0");

            static ORIGINAL: ::std::sync::LazyLock<::core::option::Option<$fn_sig>> =
                ::std::sync::LazyLock::new(|| {
                    let original = unsafe { ::libc::dlsym(::libc::RTLD_NEXT, SYMBOL.as_ptr().cast()) };
                    if original.is_null() {
                        None
                    } else {
                        Some(unsafe { ::core::mem::transmute::<*mut ::libc::c_void, $fn_sig>(original) })
                    }
                });

            #[::ctor::ctor]
            unsafe fn resolve() {
                ::std::sync::LazyLock::force(&ORIGINAL);
            }

            pub fn original() -> $fn_sig {
                match *ORIGINAL {
                    Some(original) => original,
                    None => $crate::macros::unresolved(&SYMBOL[..SYMBOL.len() - 1]),
                }
            }

            $test_fn
        }
    };
}

pub(crate) use intercept_inner;
