// src/auth/credentials.rs
use crate::sheets::{CellValue, RawRow};

// Column names in the credential sheet's header row.
pub const COL_USER: &str = "usuario";
pub const COL_PASSWORD: &str = "senha";

/// Match the submitted pair against the fetched credential rows.
/// Exact match after trimming; both fields must be present and non-empty.
pub fn check_credentials(rows: &[RawRow], usuario: &str, senha: &str) -> bool {
    let usuario = usuario.trim();
    let senha = senha.trim();
    if usuario.is_empty() || senha.is_empty() {
        return false;
    }

    rows.iter()
        .any(|row| cell_matches(row.get(COL_USER), usuario) && cell_matches(row.get(COL_PASSWORD), senha))
}

fn cell_matches(cell: Option<&CellValue>, expected: &str) -> bool {
    // Passwords typed as numbers in the sheet arrive as Number cells.
    cell.map(|c| c.as_display() == expected).unwrap_or(false)
}
