//! 用户展示评分
//!
//! 展示评分 = (基础评分 + 作为卖家的交易中非空评分之和) / (1 + 非空评分个数)。
//! 分母从 1 开始，不存在除零。

pub fn derived_rating<I>(base: f64, ratings: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = ratings
        .into_iter()
        .flatten()
        .fold((base, 1u32), |(sum, count), r| (sum + r, count + 1));
    sum / f64::from(count)
}
