use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::app::App;

/// Total particles across all bursts
const PARTICLE_COUNT: usize = 200;
/// Run length in event-loop ticks (~2s at the 50ms cadence)
const LIFETIME: u32 = 40;
/// Downward pull per tick, in unit-square cells
const GRAVITY: f32 = 0.004;
/// Launch speeds are tuned for pixels; terminal cells are much coarser
const SPEED_SCALE: f32 = 0.0012;

/// Five bursts fired together: share of particles, spread in degrees
/// around straight up, launch speed, per-tick velocity decay.
const BURSTS: [(f32, f32, f32, f32); 5] = [
    (0.25, 26.0, 55.0, 0.90),
    (0.20, 60.0, 45.0, 0.90),
    (0.35, 100.0, 45.0, 0.91),
    (0.10, 120.0, 25.0, 0.92),
    (0.10, 120.0, 45.0, 0.90),
];

/// Launch point in the unit square (x, y), y growing downward
const ORIGIN: (f32, f32) = (0.5, 0.7);

const GLYPHS: [char; 4] = ['*', '\u{2022}', '\u{2726}', '\u{00B7}'];

/// Tiny deterministic generator so a celebration looks the same every time
/// and tests can assert on it.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    fn unit(&mut self) -> f32 {
        self.next() as f32 / u32::MAX as f32
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    decay: f32,
    glyph: char,
    color: usize,
}

/// The celebration overlay's particle field, in unit-square coordinates.
/// Started by the completion edge, advanced once per tick, dropped when
/// its lifetime runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct Confetti {
    ticks: u32,
    particles: Vec<Particle>,
}

impl Confetti {
    pub fn start() -> Self {
        let mut rng = Lcg(0x5EED_CAFE);
        let mut particles = Vec::with_capacity(PARTICLE_COUNT);

        let mut remaining = PARTICLE_COUNT;
        for (i, (share, spread, speed, decay)) in BURSTS.into_iter().enumerate() {
            // The last burst absorbs float rounding so the shares always
            // sum to the full count.
            let count = if i + 1 == BURSTS.len() {
                remaining
            } else {
                ((PARTICLE_COUNT as f32 * share).round() as usize).min(remaining)
            };
            remaining -= count;
            for _ in 0..count {
                let angle = (-90.0 + spread * (rng.unit() - 0.5)).to_radians();
                let speed = speed * SPEED_SCALE * (0.75 + 0.5 * rng.unit());
                particles.push(Particle {
                    x: ORIGIN.0,
                    y: ORIGIN.1,
                    // Cells are roughly twice as tall as wide
                    vx: angle.cos() * speed * 2.0,
                    vy: angle.sin() * speed,
                    decay,
                    glyph: GLYPHS[rng.next() as usize % GLYPHS.len()],
                    color: rng.next() as usize % 5,
                });
            }
        }

        Confetti {
            ticks: 0,
            particles,
        }
    }

    /// Advance the field by one tick.
    pub fn advance(&mut self) {
        self.ticks += 1;
        for p in &mut self.particles {
            p.vx *= p.decay;
            p.vy = p.vy * p.decay + GRAVITY;
            p.x += p.vx;
            p.y += p.vy;
        }
    }

    pub fn done(&self) -> bool {
        self.ticks >= LIFETIME
    }
}

/// Draw the particle field over the list area.
pub fn render_confetti(frame: &mut Frame, app: &App, area: Rect) {
    let Some(confetti) = &app.confetti else {
        return;
    };
    if area.width == 0 || area.height == 0 {
        return;
    }

    let palette = [
        app.theme.highlight,
        app.theme.green,
        app.theme.yellow,
        app.theme.red,
        app.theme.text_bright,
    ];

    let buf = frame.buffer_mut();
    for p in &confetti.particles {
        if !(0.0..1.0).contains(&p.x) || !(0.0..1.0).contains(&p.y) {
            continue;
        }
        let x = area.x + (p.x * area.width as f32) as u16;
        let y = area.y + (p.y * area.height as f32) as u16;
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(p.glyph)
                .set_fg(palette[p.color % palette.len()]);
        }
    }
}
