//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`, the `x |> f |> g |> h`
/// of languages with a pipeline operator.
///
/// Lens setters fit naturally as steps:
///
/// ```
/// use async_resource_lens::optics::Lens;
/// use async_resource_lens::{lens, pipe};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let moved = pipe!(
///     Point { x: 0, y: 0 },
///     lens!(Point, x).setter(3),
///     |point: Point| Point { y: point.x * 2, ..point },
/// );
/// assert_eq!(moved, Point { x: 3, y: 6 });
/// ```
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Each function only needs to implement [`FnOnce`].
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_pipe_value_only() {
        let result = pipe!(42);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_pipe_two() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let result = pipe!(5, double, add_one);
        assert_eq!(result, 11);
    }

    #[test]
    fn test_pipe_trailing_comma() {
        let negate = |x: i32| -x;
        assert_eq!(pipe!(5, negate,), -5);
    }
}
