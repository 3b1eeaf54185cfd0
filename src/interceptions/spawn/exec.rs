use libc::{c_char, c_int};

use crate::{argv::Argv, error::bail, macros::intercept, store::expand_store};

intercept!(execv: unsafe extern "C" fn(prog: *const c_char, argv: *const *const c_char) -> c_int);
unsafe extern "C" fn execv(prog: *const c_char, argv: *const *const c_char) -> c_int {
    let prog = expand_store!(prog);
    unsafe { execv::original()(prog.as_ptr(), argv) }
}

intercept!(execve: unsafe extern "C" fn(
    prog: *const c_char,
    argv: *const *const c_char,
    envp: *const *const c_char,
) -> c_int);
unsafe extern "C" fn execve(
    prog: *const c_char,
    argv: *const *const c_char,
    envp: *const *const c_char,
) -> c_int {
    let prog = expand_store!(prog);
    unsafe { execve::original()(prog.as_ptr(), argv, envp) }
}

intercept!(execvp: unsafe extern "C" fn(file: *const c_char, argv: *const *const c_char) -> c_int);
unsafe extern "C" fn execvp(file: *const c_char, argv: *const *const c_char) -> c_int {
    let file = expand_store!(file);
    unsafe { execvp::original()(file.as_ptr(), argv) }
}

#[cfg(target_os = "linux")]
intercept!(execvpe: unsafe extern "C" fn(
    file: *const c_char,
    argv: *const *const c_char,
    envp: *const *const c_char,
) -> c_int);
#[cfg(target_os = "linux")]
unsafe extern "C" fn execvpe(
    file: *const c_char,
    argv: *const *const c_char,
    envp: *const *const c_char,
) -> c_int {
    let file = expand_store!(file);
    unsafe { execvpe::original()(file.as_ptr(), argv, envp) }
}

#[cfg(target_os = "macos")]
intercept!(execvP: unsafe extern "C" fn(
    file: *const c_char,
    search_path: *const c_char,
    argv: *const *const c_char,
) -> c_int);
#[cfg(target_os = "macos")]
#[allow(non_snake_case)]
unsafe extern "C" fn execvP(
    file: *const c_char,
    search_path: *const c_char,
    argv: *const *const c_char,
) -> c_int {
    let file = expand_store!(file);
    unsafe { execvP::original()(file.as_ptr(), search_path, argv) }
}

// The list variants rebuild the argument vector and call the real vector
// variant directly, so the path is relocated exactly once.

intercept!(execl: unsafe extern "C" fn(path: *const c_char, arg0: *const c_char, ...) -> c_int);
unsafe extern "C" fn execl(path: *const c_char, arg0: *const c_char, mut args: ...) -> c_int {
    let _ = execl::original; // expect original to be unused
    let path = expand_store!(path);
    let argv = match Argv::collect(arg0, || unsafe { args.next_arg() }) {
        Ok(argv) => argv,
        Err(errno) => bail!(errno),
    };
    unsafe { execv::original()(path.as_ptr(), argv.as_ptr()) }
}

intercept!(execle: unsafe extern "C" fn(path: *const c_char, arg0: *const c_char, ...) -> c_int);
unsafe extern "C" fn execle(path: *const c_char, arg0: *const c_char, mut args: ...) -> c_int {
    let _ = execle::original; // expect original to be unused
    let path = expand_store!(path);
    let argv = match Argv::collect(arg0, || unsafe { args.next_arg() }) {
        Ok(argv) => argv,
        Err(errno) => bail!(errno),
    };
    // envp follows the terminating null.
    let envp: *const *const c_char = unsafe { args.next_arg() };
    unsafe { execve::original()(path.as_ptr(), argv.as_ptr(), envp) }
}

intercept!(execlp: unsafe extern "C" fn(file: *const c_char, arg0: *const c_char, ...) -> c_int);
unsafe extern "C" fn execlp(file: *const c_char, arg0: *const c_char, mut args: ...) -> c_int {
    let _ = execlp::original; // expect original to be unused
    let file = expand_store!(file);
    let argv = match Argv::collect(arg0, || unsafe { args.next_arg() }) {
        Ok(argv) => argv,
        Err(errno) => bail!(errno),
    };
    unsafe { execvp::original()(file.as_ptr(), argv.as_ptr()) }
}
