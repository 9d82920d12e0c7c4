//
// Copyright (c) 2025 Nathan Fiedler
//
use mapseq::Sequence;
use std::time::Instant;

fn benchmark_sequence(size: usize, front: usize) {
    let start = Instant::now();
    let mut coll: Sequence<usize> = Sequence::new();
    for value in 0..size {
        coll.push(value);
    }
    let duration = start.elapsed();
    println!("sequence create: {:?}", duration);

    // test sequenced access for entire collection
    let start = Instant::now();
    for (index, value) in coll.iter().enumerate() {
        assert_eq!(value, Some(&index));
    }
    let duration = start.elapsed();
    println!("sequence ordered: {:?}", duration);

    // every unshift moves the whole collection
    let start = Instant::now();
    for value in 0..front {
        coll.unshift(value);
    }
    let duration = start.elapsed();
    println!("sequence unshift x{front}: {:?}", duration);

    // test popping all elements from the sequence
    let start = Instant::now();
    while !coll.is_empty() {
        coll.pop();
    }
    let duration = start.elapsed();
    println!("sequence pop-all: {:?}", duration);
}

fn benchmark_vector(size: usize, front: usize) {
    let start = Instant::now();
    let mut coll: Vec<usize> = Vec::new();
    for value in 0..size {
        coll.push(value);
    }
    let duration = start.elapsed();
    println!("vector create: {:?}", duration);

    // test sequenced access for entire collection
    let start = Instant::now();
    for (index, value) in coll.iter().enumerate() {
        assert_eq!(*value, index);
    }
    let duration = start.elapsed();
    println!("vector ordered: {:?}", duration);

    let start = Instant::now();
    for value in 0..front {
        coll.insert(0, value);
    }
    let duration = start.elapsed();
    println!("vector insert(0) x{front}: {:?}", duration);

    // test popping all elements from the vector
    let start = Instant::now();
    while !coll.is_empty() {
        coll.pop();
    }
    let duration = start.elapsed();
    println!("vector pop-all: {:?}", duration);
}

fn main() {
    println!("creating Sequence...");
    benchmark_sequence(1_000_000, 10);
    println!("creating Vec...");
    benchmark_vector(1_000_000, 10);
}
