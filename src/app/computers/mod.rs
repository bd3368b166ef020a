pub(in crate::app) use self::chart::{
    Computed as ChartComputed, Key as ChartKey, Value as ChartValue,
};

pub(in crate::app) mod chart;
