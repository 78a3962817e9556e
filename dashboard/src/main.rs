//! Live Application Rush Dashboard
//!
//! Simulates the applicant rush across five companies: a fixed-count
//! render loop that resamples every company's live applicant count each
//! frame and redraws a horizontal bar chart in the terminal. Standalone
//! display process; shares nothing with the listings pipeline.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Company name, advertised role, baseline applicant count.
const COMPANIES: [(&str, &str, i64); 5] = [
    ("Figma", "UI/UX Designer", 450),
    ("Twitter", "ReactJS Developer", 680),
    ("Facebook", "Frontend Engineer", 920),
    ("LinkedIn", "Full Stack Developer", 1150),
    ("YouTube", "Video Content Strategist", 580),
];

const FRAMES: usize = 20;
const FRAME_DELAY: Duration = Duration::from_millis(500);

/// Width of the bar drawn for the frame's largest value.
const BAR_WIDTH: i64 = 40;

#[derive(Debug, Clone, PartialEq)]
struct CompanyRush {
    company: &'static str,
    role: &'static str,
    live_applicants: i64,
}

/// Resamples every company's live count: baseline plus a uniform offset,
/// clamped at zero. Sorted ascending so the busiest company renders last.
fn sample_frame<R: Rng>(rng: &mut R) -> Vec<CompanyRush> {
    let mut frame: Vec<CompanyRush> = COMPANIES
        .iter()
        .map(|&(company, role, base)| CompanyRush {
            company,
            role,
            live_applicants: (base + rng.gen_range(-200..=300)).max(0),
        })
        .collect();

    frame.sort_by_key(|rush| rush.live_applicants);
    frame
}

fn render_frame(out: &mut impl Write, frame: &[CompanyRush], iteration: usize) -> io::Result<()> {
    let max = frame
        .iter()
        .map(|rush| rush.live_applicants)
        .max()
        .unwrap_or(1)
        .max(1);

    // \x1b[2J clears the screen, \x1b[H homes the cursor
    write!(out, "\x1b[2J\x1b[H")?;
    writeln!(
        out,
        "🔥 Live Application Rush (frame {}/{})",
        iteration + 1,
        FRAMES
    )?;
    writeln!(out)?;

    for rush in frame {
        let bar_len = (rush.live_applicants * BAR_WIDTH / max) as usize;
        writeln!(
            out,
            "{:<10} {:<26} {} {}",
            rush.company,
            rush.role,
            "█".repeat(bar_len),
            rush.live_applicants,
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Updating every {} ms", FRAME_DELAY.as_millis())?;
    out.flush()
}

fn main() -> io::Result<()> {
    let mut rng = StdRng::from_entropy();
    let mut stdout = io::stdout();

    for iteration in 0..FRAMES {
        let frame = sample_frame(&mut rng);
        render_frame(&mut stdout, &frame, iteration)?;
        thread::sleep(FRAME_DELAY);
    }

    writeln!(stdout, "\n✅ Rush simulation complete")?;
    Ok(())
}
