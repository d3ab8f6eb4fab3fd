//! Minimal driver: an integer min-heap over arena storage.
//!
//! Allocates an arena and a heap, overfills the heap past capacity to
//! show rejection, reports the minimum, then drains the values in
//! ascending order. Dropping the arena at the end of `main` is what
//! releases the storage; the heap itself never frees anything.

use cairn::{Arena, MinHeap};

fn main() {
    let mut arena: Arena<i32> = Arena::new(32);
    let mut heap = MinHeap::init_in(&mut arena, 20, i32::cmp).expect("arena has room for 20");

    // Two of these insertions exceed capacity and are rejected.
    for i in 0..22 {
        let reading = (i * 37 + 11) % 100;
        if let Err(err) = heap.insert(reading) {
            eprintln!("insert rejected: {err}");
        }
    }

    println!("heap size: {}", heap.len());
    if let Ok(min) = heap.top() {
        println!("minimum element: {min}");
    }

    print!("values:");
    while let Ok(v) = heap.pop() {
        print!(" {v}");
    }
    println!();
}
