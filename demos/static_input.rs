use std::{
    fs::File,
    io::{BufWriter, Write},
};
use hodgkin_huxley_simulation::neuron::hodgkin_huxley::{simulate, NeuronParameters};
use hodgkin_huxley_simulation::summary::{find_peaks, get_summary};


// Simulates a neuron driven by a current step and writes the voltage trace
// to a .csv file at the working directory along with a short printed summary
// of the action potentials the step elicited
fn main() {
    let parameters = NeuronParameters::default();

    let dt = 0.1;
    let tfin = 500.;
    let seed = 42;
    let v0 = -65.;

    // 100 ms at rest before a 300 ms, 10 uA/cm2 step
    let total_steps = (tfin / dt) as usize;
    let input_current: Vec<f64> = (0..total_steps)
        .map(|step| {
            let t = step as f64 * dt;
            if t >= 100. && t < 400. { 10. } else { 0. }
        })
        .collect();

    let voltages = simulate(&parameters, seed, v0, &input_current, dt, tfin)
        .expect("Could not run simulation");

    let file = File::create("static_input.csv")
        .expect("Could not create file");
    let mut writer = BufWriter::new(file);

    writeln!(writer, "time,voltage").expect("Could not write to file");
    for (step, voltage) in voltages.iter().enumerate() {
        writeln!(writer, "{},{}", step as f64 * dt, voltage)
            .expect("Could not write to file");
    }

    let peaks = find_peaks(&voltages, 0.5);
    let summary = get_summary(&voltages, &peaks);

    println!("spikes: {}", summary.num_spikes);
    println!("average interval: {} steps", summary.average_spike_interval);
    println!("average amplitude: {} mV", summary.average_spike_amplitude);
}
