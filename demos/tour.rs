//
// Copyright (c) 2025 Nathan Fiedler
//
use mapseq::{
    Sequence, binary_search, binary_search_recursive, lower_bound, lower_bound_recursive,
};

//
// Walk through the sequence operations and their costs, printing the
// sequence after each step. Run with RUST_LOG=trace to see the shifting.
//
fn main() {
    env_logger::init();

    let mut seq: Sequence<i32> = Sequence::from([3, 2, 5, 7, 1]);
    println!("{seq}");

    // constant time access by position
    println!("value at index 3: {:?}", seq.get(3));

    // linear scan
    println!("index of 5: {:?}", seq.find_index(&5));

    // constant time append
    seq.push(9);
    println!("added 9 at the end: {seq}");

    // linear time, every element moves up
    seq.unshift(15);
    seq.insert(3, 8);
    println!("added 15 at the beginning and 8 at index 3: {seq}");

    seq.pop();
    println!("removed last element: {seq}");

    // linear time, every later element moves down
    seq.shift();
    seq.delete_at(6);
    println!("deleted first value and value at index 6: {seq}");

    seq.reverse_in_place();
    println!("reversed in place: {seq}");

    seq.sort_in_place();
    println!("sorted in place: {seq}");

    // assigning past the end leaves holes behind
    seq.set(9, 42);
    println!("assigned 42 at index 9: {seq}");

    let sorted: Vec<i32> = (0..20).map(|v| v * 3).collect();
    println!("searching {sorted:?}");
    println!("binary_search 27: {:?}", binary_search(&sorted, &27));
    println!("binary_search_recursive 28: {:?}", binary_search_recursive(&sorted, &28));
    println!("lower_bound >= 28: {:?}", lower_bound(&sorted, |v| *v >= 28));
    println!(
        "lower_bound_recursive > 57: {:?}",
        lower_bound_recursive(&sorted, |v| *v > 57)
    );
}
