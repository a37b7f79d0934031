//! The `flow!` macro for left-to-right function composition.

/// Composes functions from left to right into a single function.
///
/// `flow!(f, g, h)` returns a closure equivalent to `|x| h(g(f(x)))`, the
/// `f |> g |> h` of languages with a composing pipeline operator. Unlike
/// [`pipe!`](crate::pipe), nothing is applied yet: the result is a value that
/// can be stored and applied to many inputs.
///
/// # Syntax
///
/// - `flow!(f)` - Returns `f` unchanged
/// - `flow!(f, g)` - Returns `move |x| g(f(x))`
/// - `flow!(f, g, h, ...)` - Returns `move |x| ...h(g(f(x)))`
///
/// # Examples
///
/// ```
/// use async_resource_lens::flow;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let add_then_double = flow!(add_one, double);
/// assert_eq!(add_then_double(5), 12);
/// assert_eq!(add_then_double(0), 2);
/// ```
#[macro_export]
macro_rules! flow {
    ($function:expr) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining_flow = $crate::flow!($($remaining_functions),+);
        move |input| remaining_flow(first(input))
    }};
}

#[cfg(test)]
mod tests {
    use crate::compose::identity;

    #[test]
    fn test_flow_single() {
        let double = |x: i32| x * 2;
        assert_eq!(flow!(double)(4), 8);
    }

    #[test]
    fn test_flow_applies_left_to_right() {
        let push_a = |mut text: String| {
            text.push('a');
            text
        };
        let push_b = |mut text: String| {
            text.push('b');
            text
        };
        let push_c = |mut text: String| {
            text.push('c');
            text
        };

        let combined = flow!(push_a, push_b, push_c);
        assert_eq!(combined(String::new()), "abc");
    }

    #[test]
    fn test_flow_identity_laws() {
        let double = |x: i32| x * 2;
        let left = flow!(identity, double);
        let right = flow!(double, identity);
        assert_eq!(left(21), double(21));
        assert_eq!(right(21), double(21));
    }
}
