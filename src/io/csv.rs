use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::types::State;

/// Write trajectory data to CSV format.
///
/// Columns: t, x, v — one row per step, in simulation order. Values use the
/// shortest decimal rendering that round-trips to the same f64, so the file
/// can be parsed back for exact verification.
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[State]) -> io::Result<()> {
    writeln!(writer, "t,x,v")?;

    for s in trajectory {
        writeln!(writer, "{},{},{}", s.time, s.pos, s.vel)?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path (created or truncated).
/// The file is flushed before the handle is released.
pub fn write_trajectory_file(path: &str, trajectory: &[State]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_trajectory(&mut writer, trajectory)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_trajectory() -> Vec<State> {
        vec![
            State { time: 0.0, pos: 1.0, vel: 0.0 },
            State { time: 0.05, pos: 0.9975, vel: -0.05 },
        ]
    }

    #[test]
    fn csv_output_has_header_and_rows() {
        let mut buf = Vec::new();
        write_trajectory(&mut buf, &short_trajectory()).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "t,x,v");
        assert_eq!(lines.len(), 3); // header + 2 data rows
    }

    #[test]
    fn initial_row_renders_as_plain_integers() {
        let mut buf = Vec::new();
        write_trajectory(&mut buf, &short_trajectory()).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().nth(1).unwrap(), "0,1,0");
    }

    #[test]
    fn rendered_values_round_trip() {
        let traj = vec![State {
            time: 0.15000000000000002, // accumulated 3 * 0.05
            pos: 0.99250625,
            vel: -0.099875,
        }];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let row = output.lines().nth(1).unwrap();
        let fields: Vec<f64> = row.split(',').map(|f| f.parse().unwrap()).collect();

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].to_bits(), traj[0].time.to_bits());
        assert_eq!(fields[1].to_bits(), traj[0].pos.to_bits());
        assert_eq!(fields[2].to_bits(), traj[0].vel.to_bits());
    }

    #[test]
    fn full_run_writes_one_row_per_step() {
        use crate::sim::runner::simulate;
        use crate::types::SimConfig;

        let config = SimConfig::default();
        let traj = simulate(&config).unwrap();

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert_eq!(output.lines().count(), config.steps + 1);
        assert_eq!(output.lines().next().unwrap(), "t,x,v");
        assert_eq!(output.lines().nth(1).unwrap(), "0,1,0");
    }

    #[test]
    fn empty_trajectory_writes_header_only() {
        let mut buf = Vec::new();
        write_trajectory(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "t,x,v\n");
    }
}
