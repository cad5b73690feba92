//! Operator-facing confirmations and notices.

pub const DELETE_CONFIRM: &str = "Yakin ingin menghapus publikasi ini?";
pub const DELETE_SUCCESS: &str = "Publikasi berhasil dihapus!";
pub const DELETE_FAILED_NOTICE: &str = "Terjadi kesalahan saat menghapus publikasi. Silakan coba lagi.";
pub const ADD_SUCCESS: &str = "Publikasi berhasil ditambahkan!";
pub const EDIT_SUCCESS: &str = "Publikasi berhasil diperbarui!";
pub const LOGIN_SUCCESS: &str = "Login berhasil! Mengalihkan...";
pub const REGISTER_SUCCESS: &str = "Registrasi berhasil! Silakan login.";
pub const LOADING_LIST: &str = "Memuat daftar publikasi...";
