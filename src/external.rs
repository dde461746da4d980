//! A C API for interacting with `ParsedName` objects.

extern crate libc;

use self::libc::c_char;
use super::ParsedName;
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

// Interior NULs can't cross the boundary; they come back as a null pointer
macro_rules! str_to_char_star {
    ($str:expr) => {{
        match CString::new($str) {
            Ok(s) => s.into_raw() as *const c_char,
            Err(_) => ptr::null(),
        }
    }};
}

/// Parses with the default configuration; returns null on invalid input.
///
/// # Safety
///
/// `input` must be a valid, NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn full_name_parse(input: *const c_char) -> Option<Box<ParsedName>> {
    let s = CStr::from_ptr(input).to_string_lossy();
    ParsedName::parse(&s).ok().map(Box::new)
}

/// # Safety
///
/// `name_ptr` must come from `full_name_parse` and not have been freed.
#[no_mangle]
pub unsafe extern "C" fn full_name_free_name(name_ptr: *mut ParsedName) {
    mem::drop(Box::from_raw(name_ptr));
}

/// # Safety
///
/// `str_ptr` must come from one of the string accessors below.
#[no_mangle]
pub unsafe extern "C" fn full_name_free_string(str_ptr: *mut c_char) {
    mem::drop(CString::from_raw(str_ptr));
}

#[no_mangle]
pub extern "C" fn full_name_prefix(name: &ParsedName) -> *const c_char {
    str_to_char_star!(name.prefix())
}

#[no_mangle]
pub extern "C" fn full_name_first_name(name: &ParsedName) -> *const c_char {
    str_to_char_star!(name.first_name())
}

#[no_mangle]
pub extern "C" fn full_name_middle_name(name: &ParsedName) -> *const c_char {
    str_to_char_star!(name.middle_name())
}

#[no_mangle]
pub extern "C" fn full_name_last_name(name: &ParsedName) -> *const c_char {
    str_to_char_star!(name.last_name())
}

#[no_mangle]
pub extern "C" fn full_name_suffix(name: &ParsedName) -> *const c_char {
    str_to_char_star!(name.suffix())
}

#[no_mangle]
pub extern "C" fn full_name_nickname(name: &ParsedName) -> *const c_char {
    str_to_char_star!(name.nickname())
}

#[no_mangle]
pub extern "C" fn full_name_full_name(name: &ParsedName) -> *const c_char {
    str_to_char_star!(name.full_name())
}

#[no_mangle]
pub extern "C" fn full_name_display_name(name: &ParsedName) -> *const c_char {
    str_to_char_star!(name.display_name())
}
