mod pricing;
mod report;
