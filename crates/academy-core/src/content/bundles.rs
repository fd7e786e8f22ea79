//! Dedicated content for the core curriculum.

pub(super) struct StaticBundle {
    pub id: &'static str,
    pub introduction: &'static str,
    pub topics: &'static [&'static str],
    pub suggestions: &'static [&'static str],
}

pub(super) static BUNDLES: &[StaticBundle] = &[
    StaticBundle {
        id: "module-1",
        introduction: "Layer 1 (L1) 区块链是独立运行、自行完成交易验证与最终确认的基础公链，例如比特币、以太坊和 Solana。它们通过共识机制维护一本全网共享的账本，是整个加密生态的安全基石。理解 L1 的设计取舍，是进一步学习扩容方案、DeFi 和 NFT 的前提。",
        topics: &[
            "区块、交易与账本的基本结构",
            "工作量证明（PoW）与权益证明（PoS）共识机制",
            "比特币：数字黄金与 UTXO 模型",
            "以太坊：智能合约平台与账户模型",
            "Solana、Avalanche 等高性能公链的设计思路",
            "区块链不可能三角：去中心化、安全性与可扩展性",
            "Gas 费用的构成与影响因素",
            "节点、验证者与网络安全",
        ],
        suggestions: &[
            "阅读比特币白皮书，理解点对点电子现金的最初设想",
            "在区块链浏览器中查看一笔真实交易的完整信息",
            "对比两条公链的出块时间、手续费与生态规模",
            "用测试网钱包领取测试币并发送一笔转账",
            "关注各公链官方博客，了解协议升级计划",
        ],
    },
    StaticBundle {
        id: "module-2",
        introduction: "Layer 2 (L2) 是构建在 L1 之上的扩容网络，它把大量交易放到链下执行，再将结果或证明提交回主链，从而在继承主链安全性的同时大幅降低手续费。Optimistic Rollup 与 ZK Rollup 是目前最主流的两条技术路线。",
        topics: &[
            "为什么需要扩容：L1 的吞吐瓶颈",
            "Optimistic Rollup 与欺诈证明",
            "ZK Rollup 与有效性证明",
            "状态通道与侧链的区别",
            "跨链桥的工作方式与风险",
            "数据可用性（DA）层的作用",
            "主流 L2 生态：Arbitrum、Optimism、Base、zkSync",
        ],
        suggestions: &[
            "通过官方跨链桥把少量资产转入一个 L2 网络",
            "在 L2BEAT 上比较不同项目的安全阶段（Stage）",
            "对比同一操作在 L1 与 L2 上的手续费差异",
            "了解提款挑战期，规划好资金的跨链时间",
        ],
    },
    StaticBundle {
        id: "module-3",
        introduction: "加密钱包并不真正“存放”资产，它保存的是控制链上资产的私钥。谁掌握私钥，谁就拥有资产。本模块介绍不同类型的钱包、助记词的作用，以及在日常使用中保护资产安全的实践方法。",
        topics: &[
            "公钥、私钥与地址的关系",
            "助记词（BIP-39）的生成与恢复",
            "热钱包与冷钱包的适用场景",
            "托管钱包与非托管钱包的区别",
            "代币授权（Approve）的风险",
            "常见钓鱼与诈骗手法",
            "多签钱包与智能合约钱包",
        ],
        suggestions: &[
            "用纸笔离线抄写助记词，绝不截图或上传云端",
            "大额资产存放在硬件钱包，日常交互使用小额热钱包",
            "定期使用授权检查工具撤销不再需要的授权",
            "签名前仔细核对交易内容与目标合约地址",
            "为不同用途分别创建独立钱包地址",
        ],
    },
    StaticBundle {
        id: "module-4",
        introduction: "空投是项目方向早期用户免费发放代币的激励方式，用来奖励参与者并实现代币的广泛分布。合理的交互策略可以提高获得空投的机会，但也需要警惕虚假空投和女巫攻击规则。",
        topics: &[
            "空投的类型：持仓快照、交互奖励与任务空投",
            "经典空投案例回顾：Uniswap、Arbitrum、Jito",
            "如何筛选潜在空投项目",
            "链上交互的常见路径：跨链、兑换、提供流动性",
            "女巫攻击检测与规避原则",
            "领取空投时的安全检查",
        ],
        suggestions: &[
            "建立项目追踪表，记录每个项目的交互时间与操作",
            "只通过官方渠道领取空投，警惕私信链接",
            "控制交互成本，避免手续费超过预期收益",
            "关注项目文档与社区公告中的积分规则",
        ],
    },
    StaticBundle {
        id: "module-5",
        introduction: "挖矿是工作量证明区块链产生新区块并获得奖励的过程。矿工投入算力竞争记账权，既保障了网络安全，也承担着电力与设备成本。本模块从原理到收益计算，带你全面认识加密货币挖矿。",
        topics: &[
            "工作量证明与哈希运算",
            "区块奖励与减半机制",
            "CPU、GPU 与 ASIC 矿机的演进",
            "矿池的作用与收益分配方式（PPS、PPLNS）",
            "算力、难度与收益的计算方法",
            "电力成本与矿场选址",
            "挖矿的监管与环境争议",
        ],
        suggestions: &[
            "使用收益计算器估算不同矿机的回本周期",
            "比较主流矿池的费率与结算方式",
            "关注比特币减半周期对挖矿收益的影响",
            "在投入硬件前充分评估当地电价与政策风险",
        ],
    },
    StaticBundle {
        id: "module-6",
        introduction: "交易所是买卖加密资产的主要场所。中心化交易所（CEX）由公司托管用户资产并撮合订单，体验接近传统券商；去中心化交易所（DEX）则通过智能合约直接在链上完成兑换，用户始终掌握自己的资产。",
        topics: &[
            "订单簿撮合与自动做市商（AMM）",
            "CEX 的注册、KYC 与出入金流程",
            "DEX 的兑换流程与滑点设置",
            "流动性池与无常损失",
            "交易所储备证明（PoR）",
            "聚合器与最优路由",
            "历史交易所暴雷事件与教训",
        ],
        suggestions: &[
            "选择有储备证明和良好合规记录的中心化交易所",
            "不要把全部资产长期存放在交易所",
            "在 DEX 交易前确认代币合约地址，防范假币",
            "小额试单熟悉流程后再进行大额操作",
            "开启交易所账户的双重验证与提币白名单",
        ],
    },
    StaticBundle {
        id: "module-7",
        introduction: "NFT（非同质化代币）是记录在区块链上的唯一数字资产凭证，可以代表艺术品、游戏道具、会员资格甚至现实资产。本模块介绍 NFT 的技术标准、交易方式以及评估项目价值的常用方法。",
        topics: &[
            "ERC-721 与 ERC-1155 标准",
            "元数据与存储：IPFS 与链上存储",
            "铸造（Mint）流程与白名单机制",
            "NFT 交易市场与版税",
            "PFP、艺术、游戏与实用型 NFT",
            "地板价、稀有度与流动性评估",
        ],
        suggestions: &[
            "在测试网免费铸造一个 NFT 体验完整流程",
            "核对合集的官方链接与合约地址后再购买",
            "关注持有人分布与交易量，而不仅是地板价",
            "谨慎签署挂单与授权签名，防止资产被盗",
        ],
    },
    StaticBundle {
        id: "module-8",
        introduction: "智能合约是部署在区块链上、按预设规则自动执行的程序。本模块以 Solidity 和以太坊虚拟机（EVM）为主线，带你完成从编写、测试到部署的完整开发流程，并了解最常见的安全漏洞。",
        topics: &[
            "EVM 执行模型与 Gas 计量",
            "Solidity 基础语法与数据类型",
            "合约的状态变量、函数与事件",
            "使用 Hardhat 或 Foundry 搭建开发环境",
            "编写单元测试与模糊测试",
            "部署到测试网并在浏览器中验证源码",
            "重入攻击、整数溢出等常见漏洞",
            "可升级合约与代理模式",
            "使用 OpenZeppelin 标准库",
        ],
        suggestions: &[
            "从 ERC-20 代币合约开始动手编写",
            "每个功能都配套编写测试用例",
            "阅读知名项目的审计报告，学习漏洞成因",
            "参加 CTF 类安全挑战提升实战能力",
            "部署主网前务必进行第三方审计",
        ],
    },
    StaticBundle {
        id: "module-9",
        introduction: "DAO（去中心化自治组织）用智能合约和治理代币代替传统公司的层级管理，让社区成员共同决定项目方向。活跃的社区是 Web3 项目最重要的资产之一，本模块介绍 DAO 的运作方式以及如何有效参与社区。",
        topics: &[
            "DAO 的概念与组织形态",
            "治理代币与投票权分配",
            "提案流程：讨论、Snapshot 投票与链上执行",
            "多签金库与资金管理",
            "Discord、Telegram 社区的运营方式",
            "贡献者激励与声誉系统",
        ],
        suggestions: &[
            "加入一个感兴趣项目的 Discord 并阅读治理论坛",
            "参与一次 Snapshot 投票，体验治理流程",
            "在社区中从回答问题、撰写教程开始贡献",
            "关注提案中的资金去向与执行结果",
        ],
    },
    StaticBundle {
        id: "module-10",
        introduction: "区块链上的所有数据都是公开透明的，而区块链浏览器和数据分析平台就是读取这些数据的窗口。掌握这些工具，可以帮助你核实交易、追踪资金流向、评估项目健康度，做出更有依据的判断。",
        topics: &[
            "区块链浏览器的基本功能：交易、地址与区块查询",
            "读取合约源码与调用只读函数",
            "代币持有人分布分析",
            "使用 Dune 编写 SQL 查询链上数据",
            "链上地址标签与聪明钱追踪",
            "DeFi 锁仓量（TVL）与协议收入指标",
        ],
        suggestions: &[
            "用 Etherscan 查询自己钱包的一笔历史交易",
            "在 Dune 上 Fork 一个现成看板并修改查询",
            "交叉比对多个数据源，避免单一指标误导",
            "为常用分析建立个人书签与看板",
        ],
    },
];
