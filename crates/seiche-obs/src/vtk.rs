//! The [`VtkExporter`] observer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ObserverError;
use crate::observer::{Observer, StepControl, StepFrame};

/// Writes every `stride`-th level as a legacy-ASCII VTK
/// `STRUCTURED_POINTS` file for external visualisation.
///
/// Files land in the configured directory as `<prefix>_NNNN.vtk`, with
/// `NNNN` the zero-padded level index. Each file is self-contained:
/// mesh dimensions, origin and spacing come from the frame itself. I/O
/// failures surface as [`ObserverError`] with the `io::Error` as the
/// source, which aborts the solve.
#[derive(Debug)]
pub struct VtkExporter {
    dir: PathBuf,
    prefix: String,
    stride: u64,
}

impl VtkExporter {
    /// Export into `dir` with the given file prefix, every level.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self::with_stride(dir, prefix, 1)
    }

    /// Export level 0 and every `stride`-th level after it.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is 0.
    pub fn with_stride(dir: impl Into<PathBuf>, prefix: impl Into<String>, stride: u64) -> Self {
        assert!(stride > 0, "stride must be >= 1");
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            stride,
        }
    }

    /// The output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_frame(&self, frame: &StepFrame<'_>) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self
            .dir
            .join(format!("{}_{:04}.vtk", self.prefix, frame.step().0));
        let file = File::create(&path)?;
        let mut w = BufWriter::new(file);

        let x = frame.x();
        let y = frame.y();
        let (rows, cols) = frame.field().shape();
        let dx = if x.len() > 1 { x[1] - x[0] } else { 1.0 };
        let dy = if y.len() > 1 { y[1] - y[0] } else { 1.0 };

        writeln!(w, "# vtk DataFile Version 3.0")?;
        writeln!(w, "seiche level {} t={}", frame.step(), frame.t())?;
        writeln!(w, "ASCII")?;
        writeln!(w, "DATASET STRUCTURED_POINTS")?;
        writeln!(w, "DIMENSIONS {rows} {cols} 1")?;
        writeln!(w, "ORIGIN 0 0 0")?;
        writeln!(w, "SPACING {dx} {dy} 1")?;
        writeln!(w, "POINT_DATA {}", rows * cols)?;
        writeln!(w, "SCALARS displacement double 1")?;
        writeln!(w, "LOOKUP_TABLE default")?;
        // VTK wants x varying fastest; the first field index runs along x.
        for j in 0..cols {
            for i in 0..rows {
                writeln!(w, "{}", frame.field()[(i, j)])?;
            }
        }
        w.flush()?;
        Ok(path)
    }
}

impl Observer for VtkExporter {
    fn on_level(&mut self, frame: StepFrame<'_>) -> Result<StepControl, ObserverError> {
        if frame.step().0 % self.stride == 0 {
            self.write_frame(&frame).map_err(|e| {
                ObserverError::with_source(
                    format!("vtk export of level {} failed", frame.step()),
                    e,
                )
            })?;
        }
        Ok(StepControl::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seiche_core::{Field2, StepId};

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "seiche-vtk-{tag}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn writes_one_file_per_invoked_level() {
        let dir = temp_dir("stride");
        let mut exporter = VtkExporter::with_stride(&dir, "wave", 2);
        let field = Field2::from_fn(3, 2, |i, j| (i + j) as f64);
        let x = [0.0, 0.5, 1.0];
        let y = [0.0, 1.0];
        for n in 0..5u64 {
            exporter
                .on_level(StepFrame::new(&field, &x, &y, 0.1 * n as f64, StepId(n)))
                .unwrap();
        }
        let mut names: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["wave_0000.vtk", "wave_0002.vtk", "wave_0004.vtk"]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn file_carries_header_and_all_points() {
        let dir = temp_dir("contents");
        let mut exporter = VtkExporter::new(&dir, "u");
        let field = Field2::from_fn(3, 2, |i, j| (10 * i + j) as f64);
        let x = [0.0, 0.5, 1.0];
        let y = [0.0, 2.0];
        exporter
            .on_level(StepFrame::new(&field, &x, &y, 0.0, StepId(0)))
            .unwrap();

        let text = fs::read_to_string(dir.join("u_0000.vtk")).unwrap();
        assert!(text.contains("DATASET STRUCTURED_POINTS"));
        assert!(text.contains("DIMENSIONS 3 2 1"));
        assert!(text.contains("SPACING 0.5 2 1"));
        assert!(text.contains("POINT_DATA 6"));
        // x varies fastest: u(0,0), u(1,0), u(2,0), u(0,1), ...
        let values: Vec<&str> = text.lines().rev().take(6).collect();
        let mut values: Vec<f64> = values
            .into_iter()
            .rev()
            .map(|l| l.parse().unwrap())
            .collect();
        assert_eq!(values.remove(0), 0.0);
        assert_eq!(values.remove(0), 10.0);
        assert_eq!(values.remove(0), 20.0);
        assert_eq!(values.remove(0), 1.0);
        fs::remove_dir_all(&dir).unwrap();
    }
}
