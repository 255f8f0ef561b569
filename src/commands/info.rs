//! `info` — print metadata for a path: file type, owner, group, size, and
//! permission bits.

use std::ffi::CStr;
use std::fs::{self, FileType};
use std::io::Write;
use std::os::unix::fs::{FileTypeExt, MetadataExt, PermissionsExt};

use super::types::{Command, CommandContext, OpError};

pub struct InfoCommand;

impl Command for InfoCommand {
    fn name(&self) -> &'static str {
        "info"
    }

    fn narration(&self) -> &'static str {
        "File information will be displayed:"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), OpError> {
        let path = ctx.next_arg("path")?;
        let meta = fs::symlink_metadata(&path).map_err(|e| OpError::io("stat", &path, e))?;

        let owner = user_name(meta.uid()).ok_or(OpError::UnknownOwner(meta.uid()))?;
        let group = group_name(meta.gid()).ok_or(OpError::UnknownGroup(meta.gid()))?;

        writeln!(ctx.out, "File: {}", classify(meta.file_type())).map_err(OpError::Output)?;
        writeln!(ctx.out, "Owner: {}", owner).map_err(OpError::Output)?;
        writeln!(ctx.out, "Group: {}", group).map_err(OpError::Output)?;
        writeln!(ctx.out, "Size: {}B", meta.len()).map_err(OpError::Output)?;
        writeln!(ctx.out, "Access: 0{:o}", meta.permissions().mode() & 0o777)
            .map_err(OpError::Output)?;
        Ok(())
    }
}

/// Fixed mapping from the OS file-type bits to a display tag.
fn classify(ft: FileType) -> &'static str {
    if ft.is_block_device() {
        "block device"
    } else if ft.is_char_device() {
        "character device"
    } else if ft.is_dir() {
        "directory"
    } else if ft.is_fifo() {
        "FIFO/pipe"
    } else if ft.is_symlink() {
        "symlink"
    } else if ft.is_file() {
        "regular file"
    } else if ft.is_socket() {
        "socket"
    } else {
        "unknown?"
    }
}

fn user_name(uid: u32) -> Option<String> {
    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut buf = vec![0u8; 4096];
    let mut result: *mut libc::passwd = std::ptr::null_mut();
    let rc = unsafe {
        libc::getpwuid_r(
            uid,
            &mut pwd,
            buf.as_mut_ptr() as *mut libc::c_char,
            buf.len(),
            &mut result,
        )
    };
    if rc != 0 || result.is_null() {
        return None;
    }
    // pw_name points into buf, which outlives this borrow
    let name = unsafe { CStr::from_ptr(pwd.pw_name) };
    Some(name.to_string_lossy().into_owned())
}

fn group_name(gid: u32) -> Option<String> {
    let mut grp: libc::group = unsafe { std::mem::zeroed() };
    let mut buf = vec![0u8; 4096];
    let mut result: *mut libc::group = std::ptr::null_mut();
    let rc = unsafe {
        libc::getgrgid_r(
            gid,
            &mut grp,
            buf.as_mut_ptr() as *mut libc::c_char,
            buf.len(),
            &mut result,
        )
    };
    if rc != 0 || result.is_null() {
        return None;
    }
    let name = unsafe { CStr::from_ptr(grp.gr_name) };
    Some(name.to_string_lossy().into_owned())
}
