/// Bytes of stack that must remain before a recursive step grows the stack.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each freshly allocated stack segment.
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, first growing the stack if less than the red zone remains.
///
/// Wrap the recursive step of any function whose depth follows the nesting
/// depth of user code.
///
/// ```
/// use april::util::stack::ensure_sufficient_stack;
///
/// fn depth(n: u32) -> u32 {
///     if n == 0 { 0 } else { ensure_sufficient_stack(|| 1 + depth(n - 1)) }
/// }
///
/// assert_eq!(depth(100_000), 100_000);
/// ```
#[cfg(not(target_arch = "wasm32"))]
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// Runs `f` directly; the stack cannot be grown on this target.
#[cfg(target_arch = "wasm32")]
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
