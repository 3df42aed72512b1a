/// Solve the trapping water challenge: the total units of rain water retained
/// between the given building heights, each building one unit wide.
///
/// Two-pointer scan from both ends: the lower of the two frontier heights
/// bounds how much water its column can hold, so that side advances and
/// settles against its running maximum. Runs in one pass with no allocation.
/// Fewer than three buildings trap nothing.
///
/// ```
/// use waypath::trapping_water;
///
/// assert_eq!(trapping_water(&[3, 0, 0, 2, 0, 4]), 10);
/// ```
pub fn trapping_water(heights: &[u64]) -> u64 {
    let (mut left, mut right) = (0, heights.len().saturating_sub(1));
    let (mut left_max, mut right_max) = (0, 0);
    let mut trapped = 0;

    while left < right {
        if heights[left] < heights[right] {
            if heights[left] >= left_max {
                left_max = heights[left];
            } else {
                trapped += left_max - heights[left];
            }
            left += 1;
        } else {
            if heights[right] >= right_max {
                right_max = heights[right];
            } else {
                trapped += right_max - heights[right];
            }
            right -= 1;
        }
    }

    trapped
}
