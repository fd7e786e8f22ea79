//! Extended reading sections attached to selected modules.

use serde::Serialize;

/// Extended sections rendered after the topic list
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DeepDive {
    pub id: &'static str,
    pub sections: &'static [DeepDiveSection],
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DeepDiveSection {
    pub title: &'static str,
    pub blocks: &'static [Block],
}

/// One piece of content inside a section
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Block {
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    Table {
        headers: &'static [&'static str],
        rows: &'static [&'static [&'static str]],
    },
    /// Highlighted tip or warning
    Callout(&'static str),
}

/// Deep dive for a module id, if one exists
pub fn deep_dive(id: &str) -> Option<&'static DeepDive> {
    DEEP_DIVES.iter().find(|d| d.id == id)
}

static DEEP_DIVES: &[DeepDive] = &[
    DeepDive {
        id: "module-1",
        sections: &[
            DeepDiveSection {
                title: "主流 L1 公链对比",
                blocks: &[
                    Block::Paragraph("不同公链在共识机制、性能与生态上各有取舍，下表列出几条代表性公链的关键参数。"),
                    Block::Table {
                        headers: &["公链", "共识机制", "出块时间", "特点"],
                        rows: &[
                            &["Bitcoin", "PoW", "约 10 分钟", "最安全、最去中心化的价值存储"],
                            &["Ethereum", "PoS", "约 12 秒", "最大的智能合约与 DeFi 生态"],
                            &["Solana", "PoS + PoH", "约 0.4 秒", "高吞吐、低手续费"],
                            &["BNB Chain", "PoSA", "约 3 秒", "EVM 兼容，交易所生态支持"],
                        ],
                    },
                ],
            },
            DeepDiveSection {
                title: "区块链不可能三角",
                blocks: &[
                    Block::Paragraph("一条区块链很难同时在以下三个方面做到极致："),
                    Block::Bullets(&[
                        "去中心化：参与验证的节点数量与门槛",
                        "安全性：抵御攻击与篡改的能力",
                        "可扩展性：每秒可处理的交易数量",
                    ]),
                    Block::Callout("这也是 Layer 2 扩容方案出现的根本原因：把可扩展性交给上层解决。"),
                ],
            },
        ],
    },
    DeepDive {
        id: "module-2",
        sections: &[DeepDiveSection {
            title: "Optimistic Rollup 与 ZK Rollup",
            blocks: &[
                Block::Table {
                    headers: &["对比项", "Optimistic Rollup", "ZK Rollup"],
                    rows: &[
                        &["验证方式", "欺诈证明（默认交易有效）", "有效性证明（零知识证明）"],
                        &["提款到 L1", "约 7 天挑战期", "证明确认后即可提款"],
                        &["EVM 兼容性", "高", "逐步完善中"],
                        &["代表项目", "Arbitrum、Optimism、Base", "zkSync、Starknet、Scroll"],
                    ],
                },
                Block::Callout("使用第三方快速桥可以绕过挑战期，但需要额外信任桥的安全性。"),
            ],
        }],
    },
    DeepDive {
        id: "module-3",
        sections: &[
            DeepDiveSection {
                title: "钱包类型一览",
                blocks: &[Block::Table {
                    headers: &["类型", "代表产品", "安全性", "便利性"],
                    rows: &[
                        &["浏览器插件钱包", "MetaMask、Rabby", "中", "高"],
                        &["移动端钱包", "Trust Wallet、imToken", "中", "高"],
                        &["硬件钱包", "Ledger、Trezor", "高", "中"],
                        &["交易所托管账户", "各大 CEX", "取决于平台", "高"],
                    ],
                }],
            },
            DeepDiveSection {
                title: "安全清单",
                blocks: &[
                    Block::Bullets(&[
                        "任何人索要助记词都是诈骗",
                        "不要在联网设备上明文保存助记词",
                        "警惕“免费空投”代币，它们可能诱导你授权恶意合约",
                        "使用书签访问常用 DApp，避免搜索引擎中的仿冒网站",
                    ]),
                    Block::Callout("助记词一旦泄露，资产无法找回，没有任何客服可以帮你冻结。"),
                ],
            },
        ],
    },
    DeepDive {
        id: "module-6",
        sections: &[DeepDiveSection {
            title: "CEX 与 DEX 对比",
            blocks: &[
                Block::Table {
                    headers: &["对比项", "中心化交易所（CEX）", "去中心化交易所（DEX）"],
                    rows: &[
                        &["资产托管", "平台托管", "用户自托管"],
                        &["身份认证", "通常需要 KYC", "无需注册"],
                        &["交易机制", "订单簿撮合", "AMM 流动性池"],
                        &["法币出入金", "支持", "通常不支持"],
                        &["主要风险", "平台跑路、冻结", "合约漏洞、假币"],
                    ],
                },
                Block::Paragraph("新手可以先在合规的中心化交易所完成法币入金，再把资产提到自己的钱包中体验 DEX。"),
            ],
        }],
    },
];
