//! Equalizer demo: run all three strategies over a multi-tone signal.
//!
//! Run with: cargo run -p siete-eq --example eq_demo

use siete_eq::{AudioBuffer, BandGains, EqMethod, equalize};
use siete_spectral::fft::{RealFft, bin_frequencies};
use std::f32::consts::PI;

fn band_energy(signal: &[f32], sample_rate: f32, low_hz: f32, high_hz: f32) -> f32 {
    let fft = RealFft::new(signal.len());
    let spectrum = fft.forward(signal);
    let freqs = bin_frequencies(sample_rate, spectrum.len());
    spectrum
        .iter()
        .zip(freqs.iter())
        .filter(|&(_, &f)| f >= low_hz && f < high_hz)
        .map(|(c, _)| c.norm_sqr())
        .sum()
}

fn main() {
    let sample_rate = 44100.0;
    let samples = 44100;

    // --- One second of 40 Hz + 1 kHz + 8 kHz ---
    println!("=== Input: 40 Hz + 1 kHz + 8 kHz, 1 second at 44100 Hz ===\n");

    let signal: Vec<f32> = (0..samples)
        .map(|i| {
            let t = i as f32 / sample_rate;
            0.2 * (2.0 * PI * 40.0 * t).sin()
                + 0.2 * (2.0 * PI * 1000.0 * t).sin()
                + 0.2 * (2.0 * PI * 8000.0 * t).sin()
        })
        .collect();
    let buffer = AudioBuffer::from_mono(signal);

    // Boost the lows, cut the mids a little
    let gains = BandGains::new(9.0, 6.0, 0.0, -3.0, 0.0, 0.0, 0.0);
    println!("Gains: sub_bass +9 dB, bass +6 dB, mid -3 dB\n");

    let bands: [(&str, f32, f32); 3] = [
        ("sub_bass", 20.0, 60.0),
        ("mid", 500.0, 2000.0),
        ("brilliance", 6000.0, 22050.0),
    ];

    println!(
        "{:>12} {:>14} {:>14} {:>14}",
        "band", "input", "output", "ratio"
    );
    for method in [EqMethod::DirectFft, EqMethod::Smooth, EqMethod::SubCompress] {
        let output = equalize(method, &buffer, sample_rate, &gains).unwrap();
        println!("\n--- {:?} (peak {:.3}) ---", method, output.peak());
        for (name, low, high) in bands {
            let before = band_energy(buffer.signal(0), sample_rate, low, high);
            let after = band_energy(output.signal(0), sample_rate, low, high);
            println!(
                "{:>12} {:>14.4} {:>14.4} {:>13.2}x",
                name,
                before,
                after,
                after / before
            );
        }
    }
}
