//! 探测结果格式化输出（含重定向提示）

use crate::detector::DetectionResult;

/// 终端汇总输出
pub fn print_results(results: &[DetectionResult]) {
    println!("{}", "=".repeat(80));
    println!("React资产探测结果汇总 (共{}个URL)", results.len());
    println!("{}", "=".repeat(80));

    for res in results {
        println!("\n[原始URL]: {}", res.url);
        if res.final_url != res.url {
            println!("[最终URL]: {}（已自动跟随重定向）", res.final_url);
        }

        if let Some(error) = &res.error {
            println!("  状态: 探测失败");
            println!("  错误: {}", error);
        } else {
            println!("  状态: {}", res.verdict);

            if !res.core_evidence.is_empty() {
                println!("  核心证据 ({}条):", res.core_evidence.len());
                for (idx, evidence) in res.core_evidence.iter().enumerate() {
                    println!("    {}. {}", idx + 1, evidence);
                }
            }

            if !res.aux_evidence.is_empty() {
                println!("  辅助证据 ({}条):", res.aux_evidence.len());
                for (idx, evidence) in res.aux_evidence.iter().enumerate() {
                    println!("    {}. {}", idx + 1, evidence);
                }
            }

            if res.core_evidence.is_empty() && res.aux_evidence.is_empty() {
                println!("  证据链: 无任何React相关特征");
            }
        }
        println!("{}", "-".repeat(50));
    }
}
