//! Splitting a qualified member into its type and method names.

/// Splits `Namespace.Type.Method` into `("Namespace.Type", "Method")`.
///
/// The split point is the rightmost `.` outside of any `<...>` or `[...]`
/// group, so explicit interface implementations, nested types (`+`) and
/// generic arguments stay on the type side. Constructors written as
/// `Type..ctor` split before the doubled dot and keep `.ctor` as the method.
///
/// Returns `None` when there is no top-level dot or either side is empty.
///
/// # Examples
///
/// ```
/// use framescan::member::split_member;
///
/// assert_eq!(
///     split_member("System.Web.HttpApplication.MapHandlerExecutionStep.System.Web.HttpApplication.IExecutionStep.Execute"),
///     Some(("System.Web.HttpApplication.MapHandlerExecutionStep.System.Web.HttpApplication.IExecutionStep", "Execute")),
/// );
/// assert_eq!(split_member("App.Widget..ctor"), Some(("App.Widget", ".ctor")));
/// assert_eq!(split_member("Main"), None);
/// ```
#[must_use]
pub fn split_member(member: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    let mut split = None;

    for (idx, ch) in member.char_indices() {
        match ch {
            '<' | '[' => depth += 1,
            '>' | ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => split = Some(idx),
            _ => {}
        }
    }

    let mut idx = split?;
    if idx > 0 && member.as_bytes()[idx - 1] == b'.' {
        idx -= 1;
    }

    let (type_name, method_name) = (&member[..idx], &member[idx + 1..]);
    if type_name.is_empty() || method_name.is_empty() {
        return None;
    }
    Some((type_name, method_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Elmah.ErrorLogPageFactory.FindHandler", "Elmah.ErrorLogPageFactory", "FindHandler")]
    #[case(
        "System.Web.Mvc.MvcHandler.System.Web.IHttpAsyncHandler.BeginProcessRequest",
        "System.Web.Mvc.MvcHandler.System.Web.IHttpAsyncHandler",
        "BeginProcessRequest"
    )]
    #[case(
        "System.Web.HttpApplication+<Pipeline>c__Iterator3.MoveNext",
        "System.Web.HttpApplication+<Pipeline>c__Iterator3",
        "MoveNext"
    )]
    #[case(
        "System.Collections.Generic.List`1[System.Int32].ForEach",
        "System.Collections.Generic.List`1[System.Int32]",
        "ForEach"
    )]
    #[case(
        "App.Service.<>c__DisplayClass4_0.<Run>b__0",
        "App.Service.<>c__DisplayClass4_0",
        "<Run>b__0"
    )]
    #[case("App.Repository`1.Find[TKey]", "App.Repository`1", "Find[TKey]")]
    #[case("App.Widget..ctor", "App.Widget", ".ctor")]
    #[case("App.Widget..cctor", "App.Widget", ".cctor")]
    #[case("App.Outer+Inner.Run", "App.Outer+Inner", "Run")]
    fn splits_at_rightmost_top_level_dot(
        #[case] member: &str,
        #[case] type_name: &str,
        #[case] method_name: &str,
    ) {
        assert_eq!(split_member(member), Some((type_name, method_name)));
    }

    #[rstest]
    #[case("Main")]
    #[case(".Run")]
    #[case("App.Program.")]
    #[case("List<System.Int32>")]
    #[case("")]
    fn rejects_members_without_both_sides(#[case] member: &str) {
        assert_eq!(split_member(member), None);
    }

    #[test]
    fn dots_inside_generic_arguments_are_ignored() {
        assert_eq!(
            split_member("App.Cache<System.String>.Get"),
            Some(("App.Cache<System.String>", "Get"))
        );
    }
}
