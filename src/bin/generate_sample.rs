use serde::Serialize;

/// Sweep parameters matching the study this tool plots.
const VMAX: u32 = 5;
const ROAD_LENGTH: u32 = 1000;

/// One output row; field order fixes the CSV column order.
#[derive(Serialize)]
struct Row {
    probability: f64,
    density: f64,
    flow: f64,
}

/// Synthetic steady-state flow for one (density, slowdown probability)
/// pair: free-flow branch at speed vmax - p, congested branch at hole
/// speed 1 - p, plus measurement noise.
fn measured_flow(density: f64, p: f64, rng: &mut SimpleRng) -> f64 {
    let free_flow = density * (VMAX as f64 - p);
    let congested = (1.0 - density) * (1.0 - p);
    let flow = free_flow.min(congested).max(0.0);
    (flow + rng.gauss(0.0, 0.005)).max(0.0)
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let probabilities = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
    let car_counts = [
        10, 30, 50, 70, 90, 130, 170, 210, 250, 300, 350, 400, 450, 500, 650, 800, 950,
    ];

    let output_path = format!("results_fundamental_diagram_vmax{VMAX}_L{ROAD_LENGTH}.csv");
    let mut writer = csv::Writer::from_path(&output_path).expect("Failed to create output file");

    let mut rows = 0u32;
    for &p in &probabilities {
        for &ncars in &car_counts {
            let density = f64::from(ncars) / f64::from(ROAD_LENGTH);
            let flow = measured_flow(density, p, &mut rng);
            writer
                .serialize(Row {
                    probability: p,
                    density,
                    flow,
                })
                .expect("Failed to write row");
            rows += 1;
        }
    }
    writer.flush().expect("Failed to flush output file");

    println!("Wrote {rows} measurements to {output_path}");
}
