//! Exact native spellings that map to a base category with no indirection.
//!
//! Opaque handle spellings (see [`super::handles`]) also resolve here, as a
//! signed platform-width integer.

use super::handles::is_handle_type;
use crate::core::BaseType;
use once_cell::sync::Lazy;
use std::collections::HashMap;

const PRIMITIVE_ALIASES: &[(&str, BaseType)] = &[
    // boolean
    ("bool", BaseType::Bool),
    ("BOOLEAN", BaseType::Bool),
    // 8-bit
    ("char", BaseType::Int8),
    ("__int8", BaseType::Int8),
    ("signed char", BaseType::Int8),
    ("signed __int8", BaseType::Int8),
    ("INT8", BaseType::Int8),
    ("unsigned char", BaseType::UInt8),
    ("unsigned __int8", BaseType::UInt8),
    ("UINT8", BaseType::UInt8),
    ("BYTE", BaseType::UInt8),
    ("CHAR", BaseType::UInt8),
    ("UCHAR", BaseType::UInt8),
    ("CCHAR", BaseType::UInt8),
    // 16-bit
    ("short", BaseType::Int16),
    ("short int", BaseType::Int16),
    ("__int16", BaseType::Int16),
    ("signed short", BaseType::Int16),
    ("signed short int", BaseType::Int16),
    ("signed __int16", BaseType::Int16),
    ("INT16", BaseType::Int16),
    ("SHORT", BaseType::Int16),
    ("unsigned short", BaseType::UInt16),
    ("unsigned short int", BaseType::UInt16),
    ("unsigned __int16", BaseType::UInt16),
    ("USHORT", BaseType::UInt16),
    ("UINT16", BaseType::UInt16),
    ("WORD", BaseType::UInt16),
    ("ATOM", BaseType::UInt16),
    ("LANGID", BaseType::UInt16),
    // 32-bit
    ("int", BaseType::Int32),
    ("long", BaseType::Int32),
    ("long int", BaseType::Int32),
    ("__int32", BaseType::Int32),
    ("signed int", BaseType::Int32),
    ("signed long", BaseType::Int32),
    ("signed long int", BaseType::Int32),
    ("signed __int32", BaseType::Int32),
    ("BOOL", BaseType::Int32),
    ("INT", BaseType::Int32),
    ("INT32", BaseType::Int32),
    ("LONG", BaseType::Int32),
    ("LONG32", BaseType::Int32),
    ("HRESULT", BaseType::Int32),
    ("HFILE", BaseType::Int32),
    ("NTSTATUS", BaseType::Int32),
    ("unsigned int", BaseType::UInt32),
    ("unsigned long", BaseType::UInt32),
    ("unsigned long int", BaseType::UInt32),
    ("unsigned __int32", BaseType::UInt32),
    ("error_status_t", BaseType::UInt32),
    ("DWORD", BaseType::UInt32),
    ("DWORD32", BaseType::UInt32),
    ("UINT", BaseType::UInt32),
    ("UINT32", BaseType::UInt32),
    ("ULONG", BaseType::UInt32),
    ("ULONG32", BaseType::UInt32),
    ("HCALL", BaseType::UInt32),
    ("COLORREF", BaseType::UInt32),
    ("NET_API_STATUS", BaseType::UInt32),
    ("LCID", BaseType::UInt32),
    ("LCTYPE", BaseType::UInt32),
    ("LGRPID", BaseType::UInt32),
    // 64-bit
    ("long long", BaseType::Int64),
    ("long long int", BaseType::Int64),
    ("__int64", BaseType::Int64),
    ("hyper", BaseType::Int64),
    ("signed long long", BaseType::Int64),
    ("signed long long int", BaseType::Int64),
    ("signed __int64", BaseType::Int64),
    ("signed hyper", BaseType::Int64),
    ("INT64", BaseType::Int64),
    ("LONG64", BaseType::Int64),
    ("LONGLONG", BaseType::Int64),
    ("USN", BaseType::Int64),
    ("unsigned long long", BaseType::UInt64),
    ("unsigned long long int", BaseType::UInt64),
    ("unsigned __int64", BaseType::UInt64),
    ("unsigned hyper", BaseType::UInt64),
    ("UINT64", BaseType::UInt64),
    ("ULONG64", BaseType::UInt64),
    ("DWORD64", BaseType::UInt64),
    ("DWORDLONG", BaseType::UInt64),
    ("ULONGLONG", BaseType::UInt64),
    ("QWORD", BaseType::UInt64),
    // characters
    ("wchar_t", BaseType::Char),
    ("WCHAR", BaseType::Char),
    ("UNICODE", BaseType::Char),
    ("TBYTE", BaseType::Char),
    ("TCHAR", BaseType::Char),
    // floating point
    ("float", BaseType::Float32),
    ("FLOAT", BaseType::Float32),
    ("double", BaseType::Float64),
    ("DOUBLE", BaseType::Float64),
    // platform-width integers and untyped pointers
    ("__int3264", BaseType::IntPtr),
    ("LONG_PTR", BaseType::IntPtr),
    ("PVOID", BaseType::IntPtr),
    ("LPVOID", BaseType::IntPtr),
    ("LPCVOID", BaseType::IntPtr),
    ("INT_PTR", BaseType::IntPtr),
    ("WPARAM", BaseType::IntPtr),
    ("LPARAM", BaseType::IntPtr),
    ("LRESULT", BaseType::IntPtr),
    ("SSIZE_T", BaseType::IntPtr),
    ("SC_LOCK", BaseType::IntPtr),
    ("unsigned __int3264", BaseType::UIntPtr),
    ("size_t", BaseType::UIntPtr),
    ("ULONG_PTR", BaseType::UIntPtr),
    ("DWORD_PTR", BaseType::UIntPtr),
    ("SIZE_T", BaseType::UIntPtr),
    ("UINT_PTR", BaseType::UIntPtr),
    // void
    ("void", BaseType::Void),
    ("VOID", BaseType::Void),
];

static PRIMITIVES: Lazy<HashMap<&'static str, BaseType>> =
    Lazy::new(|| PRIMITIVE_ALIASES.iter().copied().collect());

/// Look up an exact primitive spelling, falling back to the handle set.
pub fn lookup(token: &str) -> Option<BaseType> {
    PRIMITIVES.get(token).copied().or_else(|| {
        if is_handle_type(token) {
            Some(BaseType::IntPtr)
        } else {
            None
        }
    })
}

/// Every spelling in the exact primitive table.
pub fn spellings() -> impl Iterator<Item = &'static str> {
    PRIMITIVE_ALIASES.iter().map(|(spelling, _)| *spelling)
}
