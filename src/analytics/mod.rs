pub mod exotic_analytic;
