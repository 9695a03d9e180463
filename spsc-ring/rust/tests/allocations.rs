use spsc_ring::{
    handler::{Count, Panic},
    RingBuffer,
};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

// Runs without the libtest harness so only the buffer's own work is profiled.
fn main() {
    let _profiler = dhat::Profiler::builder().testing().build();

    let mut rx = RingBuffer::<u8, 256, Count>::new();
    for round in 0..1_000usize {
        for b in 0..=255u8 {
            rx.write_next(b);
        }
        assert_eq!(rx.handler().overruns(), round + 1);
        for b in 0..255u8 {
            assert_eq!(rx.read_next(), b);
        }
        rx.read_next();
    }
    assert_eq!(rx.handler().underruns(), 1_000);

    let mut strict = RingBuffer::<u64, 17, Panic>::new();
    for i in 0..100_000u64 {
        strict.write_next(i);
        assert_eq!(strict.try_read(), Ok(i));
    }

    let copy = strict.clone();
    let moved = std::mem::take(&mut strict);
    assert_eq!(copy.as_slice(), moved.as_slice());

    let stats = dhat::HeapStats::get();
    dhat::assert_eq!(stats.total_blocks, 0);
    dhat::assert_eq!(stats.total_bytes, 0);
}
