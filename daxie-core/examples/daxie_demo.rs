//! 大写转换演示程序
//!
//! 运行：cargo run --example daxie_demo

use daxie_core::{convert_amount, sanitize_input};

fn main() {
    println!("=== 人民币大写转换演示 ===\n");

    let test_cases = vec![
        ("0", "人民币零元整"),
        ("1234.56", "人民币壹仟贰佰叁拾肆元伍角陆分"),
        ("100.00", "人民币壹佰元整"),
        ("1000.5", "人民币壹仟元伍角"),
        ("10001", "人民币壹万零壹元整"),
        ("0.05", "人民币零元零伍分"),
        ("100010000", "人民币壹亿零壹万元整"),
    ];

    println!("【转换】\n");
    for (i, (input, expected)) in test_cases.iter().enumerate() {
        let output = convert_amount(input).unwrap_or_else(|e| e.to_string());
        let status = if &output == expected { "✓" } else { "✗" };

        println!("#{} {} 输入: \"{}\"", i + 1, status, input);
        println!("     输出: \"{}\"", output);
        println!("     期望: \"{}\"", expected);
        println!();
    }

    println!("【输入过滤】\n");
    for raw in ["¥1,234.567", "12..", "abc"] {
        let cleaned = sanitize_input(raw);
        let output = convert_amount(&cleaned).unwrap_or_else(|e| e.to_string());
        println!("  \"{}\" → \"{}\" → {}", raw, cleaned, output);
    }
}
