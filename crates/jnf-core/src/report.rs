//! Text rendering of a decomposition, in two phases.
//!
//! Phase 1 lists the Jordan blocks grouped by eigenvalue and size; phase 2
//! dumps the basis vectors. Both write to any `io::Write`, so callers can
//! target stdout, a file, or a buffer in tests.

use std::io::{self, Write};

use crate::jnf::JordanForm;

/// Phase 1: one line per distinct `(lambda, size)` group, in cell-list
/// order:
///
/// ```text
/// lambda: <lambda> cell size: <size> num cells: <count>
/// ```
pub fn write_block_report<W: Write>(out: &mut W, form: &JordanForm) -> io::Result<()> {
    let mut i = 0;
    while i < form.cells.len() {
        let cell = &form.cells[i];
        let mut count = 1;
        while i + count < form.cells.len() && form.cells[i + count] == *cell {
            count += 1;
        }
        writeln!(
            out,
            "lambda: {} cell size: {} num cells: {}",
            cell.lambda, cell.size, count
        )?;
        i += count;
    }
    Ok(())
}

/// Phase 2: each basis vector as one entry per line (entries carry a
/// trailing space), followed by a `---` separator line.
pub fn write_basis_report<W: Write>(out: &mut W, form: &JordanForm) -> io::Result<()> {
    for vector in &form.basis {
        write!(out, "{}", vector)?;
        writeln!(out, "---")?;
    }
    Ok(())
}
