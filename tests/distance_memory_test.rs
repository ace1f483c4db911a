//! Working memory of the distance routines stays proportional to the
//! shorter operand.

use std::alloc::{GlobalAlloc, Layout, System};
use std::hint::black_box;
use std::sync::atomic::{AtomicUsize, Ordering};

use wordmatch::distance::{LevenshteinMatcher, levenshtein_distance};

struct CountingAllocator;

static CURRENT: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            let now = CURRENT.fetch_add(layout.size(), Ordering::SeqCst) + layout.size();
            PEAK.fetch_max(now, Ordering::SeqCst);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        CURRENT.fetch_sub(layout.size(), Ordering::SeqCst);
    }
}

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator;

/// Peak bytes allocated by `f` above what was live when it started.
fn peak_extra_bytes<F: FnOnce() -> usize>(f: F) -> (usize, usize) {
    let baseline = CURRENT.load(Ordering::SeqCst);
    PEAK.store(baseline, Ordering::SeqCst);
    let result = black_box(f());
    (result, PEAK.load(Ordering::SeqCst) - baseline)
}

const LONG_LEN: usize = 1_000_000;
const BUDGET: usize = 1024;

// One test per binary: the allocator counters are process-wide.
#[test]
fn test_memory_bounded_by_shorter_operand() {
    let long = "x".repeat(LONG_LEN);
    let short = "ab";

    let (distance, extra) = peak_extra_bytes(|| levenshtein_distance(short, &long));
    assert_eq!(distance, LONG_LEN);
    assert!(extra < BUDGET, "short first: {extra} extra bytes");

    let (distance, extra) = peak_extra_bytes(|| levenshtein_distance(&long, short));
    assert_eq!(distance, LONG_LEN);
    assert!(extra < BUDGET, "long first: {extra} extra bytes");

    let matcher = LevenshteinMatcher::new(short);
    let (distance, extra) = peak_extra_bytes(|| matcher.distance(&long));
    assert_eq!(distance, LONG_LEN);
    assert!(extra < BUDGET, "short query: {extra} extra bytes");

    let matcher = LevenshteinMatcher::new(long.as_str());
    let (distance, extra) = peak_extra_bytes(|| matcher.distance(short));
    assert_eq!(distance, LONG_LEN);
    assert!(extra < BUDGET, "long query: {extra} extra bytes");
}
