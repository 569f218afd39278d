/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use bqoi_codec::{decode, encode, ImageDescriptor};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use nanorand::{Rng, WyRand};

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 768;

/// Horizontal gradients with noisy blocks, closer to a photo than pure noise
fn test_image(channels: usize) -> Vec<u8> {
    let mut rng = WyRand::new_seed(1);
    let mut pixels = Vec::with_capacity(WIDTH as usize * HEIGHT as usize * channels);

    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let noisy = (x / 64 + y / 64) % 3 == 0;
            for c in 0..channels {
                let value = if noisy {
                    rng.generate::<u8>()
                } else {
                    ((x + y + c as u32 * 40) & 255) as u8
                };
                pixels.push(value);
            }
        }
    }
    pixels
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("qoi: encode");

    for channels in [3, 4] {
        let pixels = test_image(channels);
        let descriptor = ImageDescriptor::from_host(WIDTH, HEIGHT, channels, "sRGB").unwrap();

        group.throughput(Throughput::Bytes(pixels.len() as u64));
        group.bench_function(format!("{channels} channels"), |b| {
            b.iter(|| black_box(encode(&descriptor, &pixels[..]).unwrap()))
        });
    }
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("qoi: decode");

    for channels in [3, 4] {
        let pixels = test_image(channels);
        let descriptor = ImageDescriptor::from_host(WIDTH, HEIGHT, channels, "sRGB").unwrap();
        let stream = encode(&descriptor, &pixels[..]).unwrap();

        group.throughput(Throughput::Bytes(pixels.len() as u64));
        group.bench_function(format!("{channels} channels"), |b| {
            b.iter(|| black_box(decode(&stream).unwrap()))
        });
    }
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(10))
      };
    targets=bench_encode,bench_decode);

criterion_main!(benches);
