//! Shell command primitives. The command string is relocated as a whole when
//! it starts with the store prefix.

use libc::{FILE, c_char, c_int};

use crate::{macros::intercept, store::expand_store};

intercept!(popen: unsafe extern "C" fn(command: *const c_char, mode: *const c_char) -> *mut FILE);
unsafe extern "C" fn popen(command: *const c_char, mode: *const c_char) -> *mut FILE {
    let command = expand_store!(command);
    unsafe { popen::original()(command.as_ptr(), mode) }
}

intercept!(system: unsafe extern "C" fn(command: *const c_char) -> c_int);
unsafe extern "C" fn system(command: *const c_char) -> c_int {
    // system(NULL) probes for a shell and is passed through.
    let command = expand_store!(command);
    unsafe { system::original()(command.as_ptr()) }
}

#[cfg(test)]
mod tests {
    use std::ffi::CString;

    use super::*;
    use crate::testing::{StoreEntry, assert_no_leaks, write_script};

    // Every call spawns a shell.
    const SPAWN_ITERATIONS: usize = 20;

    fn command(entry: &StoreEntry, args: &str) -> CString {
        let mut command = entry.store.as_bytes().to_vec();
        command.extend_from_slice(args.as_bytes());
        CString::new(command).unwrap()
    }

    #[test]
    fn system_runs_relocated_command() {
        let entry = StoreEntry::new("system");
        write_script(&entry.relocated, "exit \"$1\"\n");

        let status = unsafe { system(command(&entry, " 7").as_ptr()) };
        assert!(libc::WIFEXITED(status));
        assert_eq!(libc::WEXITSTATUS(status), 7);
    }

    #[test]
    fn system_null_reports_shell_availability() {
        assert_ne!(unsafe { system(core::ptr::null()) }, 0);
    }

    #[test]
    fn popen_reads_relocated_command_output() {
        let entry = StoreEntry::new("popen");
        write_script(&entry.relocated, "echo \"relocated $1\"\n");

        let stream = unsafe { popen(command(&entry, " ok").as_ptr(), c"r".as_ptr()) };
        assert!(!stream.is_null());
        let mut output = Vec::new();
        loop {
            let c = unsafe { libc::fgetc(stream) };
            if c == libc::EOF {
                break;
            }
            output.push(c as u8);
        }
        assert_eq!(unsafe { libc::pclose(stream) }, 0);
        assert_eq!(output, b"relocated ok\n");
    }

    #[test]
    fn no_leaks() {
        let entry = StoreEntry::new("command-leaks");
        write_script(&entry.relocated, "exit 0\n");
        let store_command = command(&entry, "");

        assert_no_leaks(
            SPAWN_ITERATIONS,
            || unsafe {
                system(store_command.as_ptr());
                libc::pclose(popen(store_command.as_ptr(), c"r".as_ptr()));
            },
            || unsafe {
                system(c"true".as_ptr());
                libc::pclose(popen(c"true".as_ptr(), c"r".as_ptr()));
            },
        );
    }
}
