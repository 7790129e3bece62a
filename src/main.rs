use tank_sim::{cgmath::Point2, Movement, Simulation};

fn main() {
    env_logger::init();

    let mut sim = Simulation::new();

    // Drive out towards the seed obstacle, then turn to face it and push into it
    println!("Simulating...");
    let script: [(&[&str], usize); 4] = [
        (&["ArrowUp"], 40),
        (&["ArrowRight"], 39),
        (&["ArrowUp", "KeyA", "KeyW"], 80),
        (&["ArrowLeft"], 20),
    ];
    for (keys, ticks) in script {
        for key in keys {
            sim.key_event(key, true);
        }
        let mut blocked = 0;
        for _ in 0..ticks {
            if let Movement::Blocked(_) = sim.step() {
                blocked += 1;
            }
        }
        for key in keys {
            sim.key_event(key, false);
        }
        let tank = sim.tank();
        println!(
            "{:?} x{}: pos ({:.2}, {:.2}), heading {:.2}, turret {:.2}, cannon {:.2}, {} blocked",
            keys,
            ticks,
            tank.position().x,
            tank.position().y,
            tank.heading(),
            tank.turret(),
            tank.cannon(),
            blocked
        );
    }

    sim.click(Point2::new(0.0, 0.0));
    println!("Frame {}: {} obstacles", sim.frame(), sim.obstacle_count());
}
